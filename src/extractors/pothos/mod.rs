//! Pothos schema-builder extractor
//!
//! Finds the places where a Pothos schema declares its types and fields.
//! Those names only exist as string arguments and object keys passed to
//! builder calls, so ordinary code navigation cannot see them.
//!
//! - **calls**: the recognized `<receiver>.<method>(...)` shapes and their extraction
//! - **fields**: resolving a `fields` callback to its object literal
//! - **helpers**: node-shape predicates (receiver calls, object properties)

mod calls;
mod fields;
mod helpers;

pub use calls::BuilderCall;

use crate::extractors::base::{BaseExtractor, LocationMap};
use std::path::Path;
use tracing::debug;
use tree_sitter::Tree;

/// Main Pothos extractor
pub struct PothosExtractor {
    base: BaseExtractor,
}

impl PothosExtractor {
    pub fn new(file_name: &Path, content: String, receiver: &str) -> Self {
        Self {
            base: BaseExtractor::new(file_name, content, receiver),
        }
    }

    /// Walk every call expression and write recognized declarations into `locations`
    ///
    /// Returns the number of builder calls that were recognized.
    pub fn extract_locations(&self, tree: &Tree, locations: &mut LocationMap) -> usize {
        let calls = self
            .base
            .find_nodes_by_type(&tree.root_node(), "call_expression");

        let mut recognized = 0;
        for call in calls {
            let Some(shape) = calls::classify_call(&self.base, &call) else {
                continue;
            };
            let args = helpers::call_arguments(&self.base, &call);
            shape.extract(&self.base, locations, &args);
            recognized += 1;
        }

        debug!(
            "Recognized {} builder calls in {}",
            recognized,
            self.base.file_name.display()
        );
        recognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::LocationRecord;
    use tree_sitter::Parser;

    const FILE: &str = "/project/src/schema/Map.ts";

    fn extract_with(code: &str, receiver: &str) -> LocationMap {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .unwrap();
        let tree = parser.parse(code, None).unwrap();
        assert!(!tree.root_node().has_error(), "fixture must parse cleanly");

        let extractor = PothosExtractor::new(Path::new(FILE), code.to_string(), receiver);
        let mut locations = LocationMap::new();
        extractor.extract_locations(&tree, &mut locations);
        locations
    }

    fn extract(code: &str) -> LocationMap {
        extract_with(code, "builder")
    }

    fn at(line: u32, column: u32) -> LocationRecord {
        LocationRecord::new(FILE, line, column)
    }

    #[test]
    fn test_prisma_node_registers_type_id_and_fields() {
        let code = r#"builder.prismaNode('Map', {
  fields: (t) => ({
    sortBy: t.field({ type: MapSortBy }),
    'title': t.exposeString('title'),
  }),
});
"#;
        let locations = extract(code);

        assert_eq!(locations.get("Map"), Some(&at(1, 19)));
        assert_eq!(locations.get("Map.id"), Some(&at(1, 19)));
        assert_eq!(locations.get("Map.sortBy"), Some(&at(3, 4)));
        assert_eq!(locations.get("Map.title"), Some(&at(4, 4)));
        assert_eq!(locations.len(), 4);
    }

    #[test]
    fn test_query_fields_registers_query_keys() {
        let code = r#"builder.queryFields((t) => ({
  maps: t.prismaConnection({ type: 'Map' }),
}));
"#;
        let locations = extract(code);

        assert_eq!(locations.get("Query.maps"), Some(&at(2, 2)));
        assert_eq!(locations.len(), 1);
    }

    #[test]
    fn test_query_fields_block_body_uses_returned_object() {
        let code = r#"builder.queryFields((t) => {
  const shared = { ignored: true };
  if (shared) {
    return { nested: 1 };
  }
  return {
    viewer: t.field({ type: 'User' }),
  };
});
"#;
        let locations = extract(code);

        assert_eq!(locations.get("Query.viewer"), Some(&at(7, 4)));
        assert!(!locations.contains_key("Query.ignored"));
        assert!(!locations.contains_key("Query.nested"));
    }

    #[test]
    fn test_enum_type_literal_and_options_name() {
        let literal = extract("export const MapSortBy = builder.enumType('MapSortBy', {\n  values: ['Recent'],\n});\n");
        assert_eq!(literal.get("MapSortBy"), Some(&at(1, 42)));

        let options = extract("builder.enumType(undefined, {\n  name: 'MapSortBy',\n  values: [],\n});\n");
        assert_eq!(options.get("MapSortBy"), Some(&at(2, 8)));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_enum_type_computed_name_is_ignored() {
        let locations = extract("builder.enumType(undefined, { name: `Map${suffix}` });\nbuilder.enumType(NAME, {});\n");
        assert!(locations.is_empty());
    }

    #[test]
    fn test_mutation_field() {
        let locations = extract("builder.mutationField('createMap', (t) => t.field({}));\n");
        assert_eq!(locations.get("Mutation.createMap"), Some(&at(1, 22)));
    }

    #[test]
    fn test_input_type_has_no_implicit_id() {
        let code = r#"builder.inputType('MapInput', {
  fields: (t) => ({ name: t.string() }),
});
"#;
        let locations = extract(code);

        assert_eq!(locations.get("MapInput"), Some(&at(1, 18)));
        assert_eq!(locations.get("MapInput.name"), Some(&at(2, 20)));
        assert!(!locations.contains_key("MapInput.id"));
    }

    #[test]
    fn test_interface_type_with_same_receiver() {
        let code = r#"builder.interfaceType(builder.interfaceRef('Node'), {
  fields: (t) => ({ x: t.id() }),
});
"#;
        let locations = extract(code);

        assert_eq!(locations.get("Node"), Some(&at(1, 43)));
        assert_eq!(locations.get("Node.x"), Some(&at(2, 20)));
    }

    #[test]
    fn test_interface_type_with_foreign_ref_is_ignored() {
        let code = r#"builder.interfaceType(other.interfaceRef('Node'), {
  fields: (t) => ({ x: t.id() }),
});
"#;
        assert!(extract(code).is_empty());
    }

    #[test]
    fn test_spread_and_computed_keys_are_skipped() {
        let code = r#"builder.prismaNode('User', {
  fields: (t) => ({
    ...sharedFields(t),
    [dynamicKey]: t.string(),
    42: t.int(),
    method() { return 1; },
    email,
  }),
});
"#;
        let locations = extract(code);

        let mut keys: Vec<&str> = locations.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["User", "User.email", "User.id"]);
        assert_eq!(locations.get("User.email"), Some(&at(7, 4)));
    }

    #[test]
    fn test_fields_not_a_function_registers_only_type() {
        let code = "builder.prismaNode('Map', { fields: sharedFields });\n";
        let locations = extract(code);

        let keys: Vec<&str> = locations.keys().collect();
        assert_eq!(keys, vec!["Map", "Map.id"]);
    }

    #[test]
    fn test_other_receivers_are_ignored() {
        let code = "schema.prismaNode('Map', {});\nbuilder?.prismaNode('Opt', {});\n";
        assert!(extract(code).is_empty());
    }

    #[test]
    fn test_custom_receiver_name() {
        let code = "schemaBuilder.mutationField('deleteMap', () => null);\nbuilder.mutationField('ignored', () => null);\n";
        let locations = extract_with(code, "schemaBuilder");

        let keys: Vec<&str> = locations.keys().collect();
        assert_eq!(keys, vec!["Mutation.deleteMap"]);
    }

    #[test]
    fn test_nested_builder_calls_are_found() {
        let code = r#"export function register() {
  if (enabled) {
    builder.mutationField('nested', (t) => t.field({}));
  }
}
"#;
        let locations = extract(code);
        assert_eq!(locations.get("Mutation.nested"), Some(&at(3, 26)));
    }

    #[test]
    fn test_column_counts_utf16_units() {
        let code = "/* ü */ builder.mutationField('x', () => null);\n";
        let locations = extract(code);
        // 'ü' is two bytes but one UTF-16 unit
        assert_eq!(locations.get("Mutation.x"), Some(&at(1, 30)));
    }

    #[test]
    fn test_lines_break_at_javascript_line_terminators() {
        let code = "// a\u{2028}b\nbuilder.mutationField('x', () => null);\r\n\
                    builder.mutationField('y', () => null);\r\
                    builder.mutationField('z', () => null);\n";
        let locations = extract(code);

        assert_eq!(locations.get("Mutation.x"), Some(&at(3, 22)));
        assert_eq!(locations.get("Mutation.y"), Some(&at(4, 22)));
        assert_eq!(locations.get("Mutation.z"), Some(&at(5, 22)));
    }

    #[test]
    fn test_prisma_node_with_non_literal_name_registers_nothing() {
        let code = r#"const NAME = 'Map';
builder.prismaNode(NAME, {
  fields: (t) => ({
    title: t.exposeString('title'),
  }),
});
"#;
        let locations = extract(code);

        assert!(locations.is_empty());
    }
}

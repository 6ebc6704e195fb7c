//! Builder-call shapes
//!
//! Each recognized `<receiver>.<method>(...)` call is a [`BuilderCall`]
//! variant with its own extraction function. Unknown methods are ignored.

use super::fields::{capture_fields, capture_properties, resolve_fields_object};
use super::helpers::{call_arguments, find_property, receiver_method_name};
use crate::extractors::base::{BaseExtractor, LocationMap};
use tree_sitter::Node;

/// The builder methods that declare schema symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderCall {
    /// `mutationField('name', ...)` -> `Mutation.<name>`
    MutationField,
    /// `enumType('Name', {...})` or `enumType(ref, { name: 'Name' })` -> `<Name>`
    EnumType,
    /// `prismaNode('Name', { fields })` -> `<Name>`, `<Name>.id`, `<Name>.<field>`
    PrismaNode,
    /// `inputType('Name', { fields })` -> `<Name>`, `<Name>.<field>`
    InputType,
    /// `queryFields((t) => ({ ... }))` -> `Query.<field>`
    QueryFields,
    /// `interfaceType(<receiver>.interfaceRef('Name'), { fields })` -> `<Name>`, `<Name>.<field>`
    InterfaceType,
}

impl BuilderCall {
    pub fn from_method_name(method: &str) -> Option<Self> {
        match method {
            "mutationField" => Some(BuilderCall::MutationField),
            "enumType" => Some(BuilderCall::EnumType),
            "prismaNode" => Some(BuilderCall::PrismaNode),
            "inputType" => Some(BuilderCall::InputType),
            "queryFields" => Some(BuilderCall::QueryFields),
            "interfaceType" => Some(BuilderCall::InterfaceType),
            _ => None,
        }
    }

    pub fn method_name(&self) -> &'static str {
        match self {
            BuilderCall::MutationField => "mutationField",
            BuilderCall::EnumType => "enumType",
            BuilderCall::PrismaNode => "prismaNode",
            BuilderCall::InputType => "inputType",
            BuilderCall::QueryFields => "queryFields",
            BuilderCall::InterfaceType => "interfaceType",
        }
    }

    /// Run this shape's extraction against the call's arguments
    pub(super) fn extract(self, base: &BaseExtractor, locations: &mut LocationMap, args: &[Node]) {
        match self {
            BuilderCall::MutationField => extract_mutation_field(base, locations, args),
            BuilderCall::EnumType => extract_enum_type(base, locations, args),
            BuilderCall::PrismaNode => extract_object_type(base, locations, args, true),
            BuilderCall::InputType => extract_object_type(base, locations, args, false),
            BuilderCall::QueryFields => extract_query_fields(base, locations, args),
            BuilderCall::InterfaceType => extract_interface_type(base, locations, args),
        }
    }
}

/// Classify a node as a recognized builder call
pub(super) fn classify_call(base: &BaseExtractor, node: &Node) -> Option<BuilderCall> {
    receiver_method_name(base, node).and_then(|method| BuilderCall::from_method_name(&method))
}

fn extract_mutation_field(base: &BaseExtractor, locations: &mut LocationMap, args: &[Node]) {
    if let Some(name) = args.first().map(|arg| base.unwrap_parenthesized(*arg)) {
        base.capture_name(locations, &name, |name| format!("Mutation.{}", name));
    }
}

fn extract_enum_type(base: &BaseExtractor, locations: &mut LocationMap, args: &[Node]) {
    let name = args.first().map(|arg| base.unwrap_parenthesized(*arg));
    if let Some(name) = name.filter(|name| name.kind() == "string") {
        base.capture_name(locations, &name, str::to_string);
        return;
    }

    // Enum refs: the name lives in the options object
    let Some(options) = args.get(1).map(|arg| base.unwrap_parenthesized(*arg)) else {
        return;
    };
    if options.kind() != "object" {
        return;
    }
    if let Some(property) = find_property(base, &options, "name") {
        base.capture_name(locations, &property.value, str::to_string);
    }
}

/// `prismaNode` and `inputType`: a literal type name plus a fields object
fn extract_object_type(
    base: &BaseExtractor,
    locations: &mut LocationMap,
    args: &[Node],
    implicit_id: bool,
) {
    let Some(name_node) = args.first().map(|arg| base.unwrap_parenthesized(*arg)) else {
        return;
    };
    let Some(type_name) = base.capture_name(locations, &name_node, str::to_string) else {
        return;
    };
    if implicit_id {
        base.record_location(locations, format!("{}.id", type_name), &name_node);
    }

    if let Some(options) = args.get(1).map(|arg| base.unwrap_parenthesized(*arg)) {
        if options.kind() == "object" {
            capture_fields(base, locations, &options, |field| {
                format!("{}.{}", type_name, field)
            });
        }
    }
}

fn extract_query_fields(base: &BaseExtractor, locations: &mut LocationMap, args: &[Node]) {
    let Some(callback) = args.first() else {
        return;
    };
    if let Some(object) = resolve_fields_object(base, *callback) {
        capture_properties(base, locations, &object, |field| format!("Query.{}", field));
    }
}

fn extract_interface_type(base: &BaseExtractor, locations: &mut LocationMap, args: &[Node]) {
    let Some(reference) = args.first().map(|arg| base.unwrap_parenthesized(*arg)) else {
        return;
    };

    // The ref must come from the same receiver: `builder.interfaceRef('Name')`
    if receiver_method_name(base, &reference).as_deref() != Some("interfaceRef") {
        return;
    }
    let ref_args = call_arguments(base, &reference);
    let Some(name_node) = ref_args.first() else {
        return;
    };
    let Some(interface_name) = base.capture_name(locations, name_node, str::to_string) else {
        return;
    };

    if let Some(options) = args.get(1).map(|arg| base.unwrap_parenthesized(*arg)) {
        if options.kind() == "object" {
            capture_fields(base, locations, &options, |field| {
                format!("{}.{}", interface_name, field)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names_round_trip() {
        for call in [
            BuilderCall::MutationField,
            BuilderCall::EnumType,
            BuilderCall::PrismaNode,
            BuilderCall::InputType,
            BuilderCall::QueryFields,
            BuilderCall::InterfaceType,
        ] {
            assert_eq!(BuilderCall::from_method_name(call.method_name()), Some(call));
        }
    }

    #[test]
    fn test_unrecognized_methods() {
        assert_eq!(BuilderCall::from_method_name("objectType"), None);
        assert_eq!(BuilderCall::from_method_name("interfaceRef"), None);
        assert_eq!(BuilderCall::from_method_name("EnumType"), None);
    }
}

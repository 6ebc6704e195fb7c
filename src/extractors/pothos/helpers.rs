//! Helper functions for the Pothos extractor
//!
//! Small node-shape predicates shared by the call and fields modules.

use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// A plain `key: value` entry of an object literal
///
/// Shorthand entries (`{ sortBy }`) are plain properties whose value is the
/// identifier itself, so `value` is the key node in that case.
#[derive(Debug, Clone, Copy)]
pub(super) struct PlainProperty<'a> {
    pub key: Node<'a>,
    pub value: Node<'a>,
}

/// Argument expressions of a call, comments skipped
pub(super) fn call_arguments<'a>(base: &BaseExtractor, call: &Node<'a>) -> Vec<Node<'a>> {
    call.child_by_field_name("arguments")
        .filter(|args| args.kind() == "arguments")
        .map(|args| base.meaningful_children(&args))
        .unwrap_or_default()
}

/// If `call` is `<receiver>.<method>(...)`, return `<method>`
///
/// Optional calls (`builder?.method()`) and computed members
/// (`builder['method']()`) are not builder calls.
pub(super) fn receiver_method_name(base: &BaseExtractor, call: &Node) -> Option<String> {
    if call.kind() != "call_expression" {
        return None;
    }

    let callee = call.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }

    let mut cursor = callee.walk();
    if callee
        .children(&mut cursor)
        .any(|child| child.kind() == "optional_chain")
    {
        return None;
    }

    let object = callee.child_by_field_name("object")?;
    if !base.is_receiver(&object) {
        return None;
    }

    let property = callee.child_by_field_name("property")?;
    if property.kind() != "property_identifier" {
        return None;
    }

    Some(base.get_node_text(&property))
}

/// The key text of an object-literal key, if it is a bare identifier or a
/// string literal. Computed and numeric keys yield `None`.
pub(super) fn property_key_name(base: &BaseExtractor, key: &Node) -> Option<String> {
    match key.kind() {
        "property_identifier" | "shorthand_property_identifier" => Some(base.get_node_text(key)),
        "string" => base.string_literal_value(key),
        _ => None,
    }
}

/// Plain properties of an object literal, in source order
///
/// Spread elements, methods, getters/setters and computed keys are skipped.
pub(super) fn plain_properties<'a>(
    base: &BaseExtractor,
    object: &Node<'a>,
) -> Vec<PlainProperty<'a>> {
    if object.kind() != "object" {
        return Vec::new();
    }

    base.meaningful_children(object)
        .into_iter()
        .filter_map(|entry| match entry.kind() {
            "pair" => {
                let key = entry.child_by_field_name("key")?;
                let value = base.field_value(&entry, "value")?;
                Some(PlainProperty { key, value })
            }
            "shorthand_property_identifier" => Some(PlainProperty {
                key: entry,
                value: entry,
            }),
            _ => None,
        })
        .collect()
}

/// Find the plain property whose key is `name`
pub(super) fn find_property<'a>(
    base: &BaseExtractor,
    object: &Node<'a>,
    name: &str,
) -> Option<PlainProperty<'a>> {
    plain_properties(base, object)
        .into_iter()
        .find(|property| property_key_name(base, &property.key).as_deref() == Some(name))
}

//! Fields-object resolution
//!
//! Pothos declarations describe their fields with a callback returning an
//! object literal: `fields: (t) => ({ name: t.exposeString('name') })`.
//! This module finds that literal and registers one key per property.

use super::helpers::{find_property, plain_properties, property_key_name};
use crate::extractors::base::{BaseExtractor, LocationMap};
use tree_sitter::Node;

/// Resolve a value to the object literal describing fields
///
/// - inline function whose body is an object literal: that literal
/// - inline function whose block body has a `return <object literal>`
///   among its direct statements: the first such literal
/// - anything else: `None`
pub(super) fn resolve_fields_object<'a>(
    base: &BaseExtractor,
    value: Node<'a>,
) -> Option<Node<'a>> {
    let function = base.unwrap_parenthesized(value);
    if !matches!(function.kind(), "arrow_function" | "function_expression" | "function") {
        return None;
    }

    let body = base.field_value(&function, "body")?;
    match body.kind() {
        "object" => Some(body),
        "statement_block" => base
            .meaningful_children(&body)
            .into_iter()
            .filter(|statement| statement.kind() == "return_statement")
            .find_map(|statement| {
                let argument = base.meaningful_children(&statement).into_iter().next()?;
                let argument = base.unwrap_parenthesized(argument);
                (argument.kind() == "object").then_some(argument)
            }),
        _ => None,
    }
}

/// Register every plain property key of `object` as `make_key(key)`
pub(super) fn capture_properties<F>(
    base: &BaseExtractor,
    locations: &mut LocationMap,
    object: &Node,
    make_key: F,
) where
    F: Fn(&str) -> String,
{
    for property in plain_properties(base, object) {
        let Some(name) = property_key_name(base, &property.key) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        base.record_location(locations, make_key(&name), &property.key);
    }
}

/// Expand the `fields` property of an options object
///
/// `options` must be an object literal; its `fields` value is resolved with
/// [`resolve_fields_object`] and each property is registered.
pub(super) fn capture_fields<F>(
    base: &BaseExtractor,
    locations: &mut LocationMap,
    options: &Node,
    make_key: F,
) where
    F: Fn(&str) -> String,
{
    let Some(fields) = find_property(base, options, "fields") else {
        return;
    };

    if let Some(object) = resolve_fields_object(base, fields.value) {
        capture_properties(base, locations, &object, make_key);
    }
}

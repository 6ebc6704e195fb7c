// Location record creation methods

use tracing::trace;
use tree_sitter::Node;

use super::extractor::BaseExtractor;
use super::types::{LocationMap, LocationRecord};

impl BaseExtractor {
    /// Create a location record pointing at the start of `node`
    pub fn create_location(&self, node: &Node) -> LocationRecord {
        let (line, column) = self.start_position(node);
        LocationRecord::new(self.file_name.clone(), line, column)
    }

    /// Register `key` at the start of `node`, replacing any earlier record
    pub fn record_location(&self, locations: &mut LocationMap, key: String, node: &Node) {
        let record = self.create_location(node);
        trace!("{} -> {}", key, record);
        locations.insert(key, record);
    }

    /// Register the value of a string literal under `make_key(value)`
    ///
    /// Returns the literal's value, or `None` (and records nothing) when the
    /// node is not a string literal.
    pub fn capture_name<F>(
        &self,
        locations: &mut LocationMap,
        node: &Node,
        make_key: F,
    ) -> Option<String>
    where
        F: Fn(&str) -> String,
    {
        let name = self.string_literal_value(node)?;
        if name.is_empty() {
            return None;
        }
        self.record_location(locations, make_key(&name), node);
        Some(name)
    }
}

// Base Extractor Types for Pothos Locate
//
// Data structures shared by the extractor, the location cache and the resolver.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::path::PathBuf;

/// Where a schema symbol is declared
///
/// Points at the first character of the name token: a string literal passed
/// to a builder call, or the key of a fields-object property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    /// Start column (0-based, UTF-16 code units)
    pub column: u32,
    /// Absolute path of the declaring file
    pub file_name: PathBuf,
    /// Start line (1-based)
    pub line: u32,
}

impl LocationRecord {
    pub fn new(file_name: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self {
            column,
            file_name: file_name.into(),
            line,
        }
    }
}

/// `<fileName>:<line>:<column>`, the format editors accept for "go to"
impl fmt::Display for LocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_name.display(), self.line, self.column)
    }
}

/// Symbol key -> declaration location
///
/// Accumulator threaded through a rebuild. Keys are unique and a later
/// insert for an existing key replaces the earlier record. Iteration is in
/// key order so the persisted form is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationMap {
    entries: BTreeMap<String, LocationRecord>,
}

impl LocationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; returns the record that was replaced, if any.
    pub fn insert(&mut self, key: String, record: LocationRecord) -> Option<LocationRecord> {
        self.entries.insert(key, record)
    }

    pub fn get(&self, key: &str) -> Option<&LocationRecord> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, LocationRecord> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, LocationRecord)> for LocationMap {
    fn from_iter<I: IntoIterator<Item = (String, LocationRecord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for LocationMap {
    type Item = (String, LocationRecord);
    type IntoIter = btree_map::IntoIter<String, LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a LocationMap {
    type Item = (&'a String, &'a LocationRecord);
    type IntoIter = btree_map::Iter<'a, String, LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_insert_replaces_earlier() {
        let mut map = LocationMap::new();
        assert!(map
            .insert("Map".to_string(), LocationRecord::new("/a.ts", 1, 2))
            .is_none());

        let replaced = map.insert("Map".to_string(), LocationRecord::new("/b.ts", 3, 4));

        assert_eq!(replaced, Some(LocationRecord::new("/a.ts", 1, 2)));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Map"), Some(&LocationRecord::new("/b.ts", 3, 4)));
    }

    #[test]
    fn test_display_is_editor_location() {
        let record = LocationRecord::new("/src/schema/Map.ts", 11, 31);
        assert_eq!(record.to_string(), "/src/schema/Map.ts:11:31");
    }

    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let record = LocationRecord::new("/x.ts", 2, 4);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"column":4,"fileName":"/x.ts","line":2}"#);
    }
}

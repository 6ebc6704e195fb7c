// Base Extractor Types and Methods for Pothos Locate
//
// - types.rs: LocationRecord and the LocationMap accumulator
// - extractor.rs: BaseExtractor implementation (node text, positions, literals)
// - tree_methods.rs: Tree navigation and traversal methods
// - creation_methods.rs: Writing location records into the accumulator

pub mod creation_methods;
pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{LocationMap, LocationRecord};

//! Schema Location Extractors Module
//!
//! tree-sitter based extraction of Pothos schema declarations.
//!
//! # Architecture
//!
//! - `base` - location types and the shared `BaseExtractor`
//! - `manager` - `ExtractorManager` public API and the `SyntaxParser` seam
//! - `pothos` - builder-call recognition and fields-object resolution

pub mod base;
pub mod manager;
pub mod pothos;

// Re-export the public API
pub use base::{LocationMap, LocationRecord};
pub use manager::{ExtractorManager, SyntaxParser, TreeSitterParser, DEFAULT_RECEIVER};
pub use pothos::{BuilderCall, PothosExtractor};

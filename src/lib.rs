// Pothos Locate - jump-to-definition for Pothos GraphQL schema symbols
//
// Schema types and fields declared through a Pothos builder only exist as
// string arguments and object keys. This crate parses the schema sources with
// tree-sitter, records where each `Type`, `Type.field`, `Query.field` and
// `Mutation.field` is declared, and caches the result between runs.

pub mod cache;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extractors;
pub mod language;
pub mod locate;
pub mod project;
pub mod resolver;

// Re-export the public API
pub use cache::{CacheState, FileTimestamps, LocationCache};
pub use config::LocateConfig;
pub use error::{LocateError, Result};
pub use extractors::{ExtractorManager, LocationMap, LocationRecord};
pub use locate::{locate, LocateOutcome};

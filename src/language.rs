//! Language Support - tree-sitter grammar selection
//!
//! Schema modules are written in TypeScript, TSX or plain JavaScript. This
//! module is the single place that maps a file to the grammar used to parse it.

use crate::error::{LocateError, Result};
use std::path::Path;

/// Grammar used when the extension tells us nothing (e.g. `.fixture`).
///
/// TSX accepts both type annotations and JSX, so it parses the widest range
/// of schema files.
pub const DEFAULT_LANGUAGE: &str = "tsx";

/// Get tree-sitter language parser for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        "javascript" => Ok(tree_sitter_javascript::LANGUAGE.into()),
        _ => Err(LocateError::Grammar {
            language: language.to_string(),
            message: "Supported languages: typescript, tsx, javascript".to_string(),
        }),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("tsx"),
        "js" | "mjs" | "cjs" | "jsx" => Some("javascript"),
        _ => None,
    }
}

/// Pick the grammar for a file, falling back to [`DEFAULT_LANGUAGE`].
pub fn language_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
        .unwrap_or(DEFAULT_LANGUAGE)
}

//! Project identity and cache location
//!
//! The cache is keyed by the `name` in the project's `package.json`, so every
//! package in a monorepo gets its own record.

use crate::error::{LocateError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fallback identifier when `package.json` has no usable name
pub const UNKNOWN_PROJECT: &str = "unknown-pothos-locate-project";

/// Directory name used below the cache root
pub const CACHE_DIR_NAME: &str = "pothos-locate";

/// Derive the project identifier from `<root>/package.json`
///
/// Scoped names like `@acme/api` become `@acme__api` so the identifier is a
/// single path component. Never fails.
pub fn project_name(root: &Path) -> String {
    let manifest = root.join("package.json");
    let name = fs::read_to_string(&manifest)
        .ok()
        .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
        .and_then(|json| json.get("name").and_then(|name| name.as_str()).map(str::to_string))
        .filter(|name| !name.is_empty())
        .map(|name| name.replace('/', "__"));

    match name {
        Some(name) => name,
        None => {
            debug!("No project name in {}, using fallback", manifest.display());
            UNKNOWN_PROJECT.to_string()
        }
    }
}

/// Directory holding cache files for projects rooted at `root`
///
/// `<root>/node_modules/.cache/pothos-locate` when `node_modules` exists,
/// otherwise `<temp dir>/pothos-locate`.
pub fn cache_directory(root: &Path) -> PathBuf {
    let node_modules = root.join("node_modules");
    if node_modules.is_dir() {
        node_modules.join(".cache").join(CACHE_DIR_NAME)
    } else {
        std::env::temp_dir().join(CACHE_DIR_NAME)
    }
}

/// Full path of the cache file for the project at `root`, creating its directory
pub fn cache_file_path(root: &Path) -> Result<PathBuf> {
    let directory = cache_directory(root);
    fs::create_dir_all(&directory).map_err(|e| LocateError::io(&directory, e))?;
    Ok(directory.join(project_name(root)))
}

//! Source file discovery
//!
//! Lists every file under the source root whose name ends in one of the
//! configured extensions, together with its modification time.

use crate::error::{LocateError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::debug;

/// An enumerated source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute path
    pub path: PathBuf,
    /// Last modification, milliseconds since the Unix epoch
    pub modified: u64,
}

/// Enumerate source files below `root`
///
/// Hidden files and directories are skipped. The returned order is the
/// enumeration order used for extraction.
pub fn discover_source_files(root: &Path, extensions: &[String]) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(LocateError::SourceRootMissing(root.to_path_buf()));
    }

    let root = root
        .canonicalize()
        .map_err(|e| LocateError::io(root, e))?;
    let pattern = format!("{}/**/*", glob::Pattern::escape(&root.to_string_lossy()));

    let options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let suffixes: Vec<String> = extensions.iter().map(|ext| format!(".{}", ext)).collect();
    let mut files = Vec::new();

    for entry in glob::glob_with(&pattern, options)? {
        let path = entry?;
        if !has_extension(&path, &suffixes) {
            continue;
        }

        let metadata = fs::metadata(&path).map_err(|e| LocateError::io(&path, e))?;
        if !metadata.is_file() {
            continue;
        }

        files.push(SourceFile {
            modified: modified_millis(&metadata),
            path,
        });
    }

    debug!(
        "Discovered {} source files under {} ({})",
        files.len(),
        root.display(),
        extensions.join(",")
    );
    Ok(files)
}

/// File name ends in `.<ext>` for one of the extensions
///
/// Compared on the whole file name so multi-part extensions such as
/// `graphql.ts` work.
fn has_extension(path: &Path, suffixes: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    suffixes
        .iter()
        .any(|suffix| name.len() > suffix.len() && name.ends_with(suffix.as_str()))
}

fn modified_millis(metadata: &fs::Metadata) -> u64 {
    metadata
        .modified()
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or(0)
}

//! Error types for Pothos Locate
//!
//! Every variant here is fatal to a run. Recoverable conditions (a missing or
//! corrupt cache file, an unknown symbol key) never surface as errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("Source directory '{}' does not exist. Please provide a valid path via the '--src' option.", .0.display())]
    SourceRootMissing(PathBuf),

    #[error("Failed to parse {}:{line}:{column}", .file.display())]
    Parse {
        file: PathBuf,
        line: u32,
        column: u32,
    },

    #[error("Failed to set parser language for {language}: {message}")]
    Grammar { language: String, message: String },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to walk source directory: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Failed to serialize location cache: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl LocateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LocateError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocateError>;

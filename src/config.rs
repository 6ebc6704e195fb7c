//! Run configuration

use crate::extractors::manager::DEFAULT_RECEIVER;
use std::path::{Path, PathBuf};

/// Extensions enumerated when none are configured
pub const DEFAULT_EXTENSIONS: &str = "ts,tsx";

/// Everything one run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateConfig {
    /// Project root (where `package.json` and `node_modules` live)
    pub root: PathBuf,
    /// Directory whose files are enumerated
    pub source_dir: PathBuf,
    /// Extensions without the leading dot
    pub extensions: Vec<String>,
    /// Ignore the persisted cache and rebuild
    pub force_rebuild: bool,
    /// Identifier builder calls must be invoked on
    pub receiver: String,
    /// Symbol key to resolve
    pub symbol: String,
}

impl LocateConfig {
    pub fn new(root: impl Into<PathBuf>, symbol: impl Into<String>) -> Self {
        let root = root.into();
        Self {
            source_dir: root.clone(),
            root,
            extensions: parse_extensions(DEFAULT_EXTENSIONS),
            force_rebuild: false,
            receiver: DEFAULT_RECEIVER.to_string(),
            symbol: symbol.into(),
        }
    }

    /// Source directory, relative paths resolved against the root
    pub fn with_source_dir(mut self, source_dir: impl AsRef<Path>) -> Self {
        self.source_dir = self.root.join(source_dir);
        self
    }

    pub fn with_extensions(mut self, extensions: &str) -> Self {
        self.extensions = parse_extensions(extensions);
        self
    }

    pub fn with_force_rebuild(mut self, force_rebuild: bool) -> Self {
        self.force_rebuild = force_rebuild;
        self
    }

    /// Receiver identifier; an empty name keeps the default
    pub fn with_receiver(mut self, receiver: &str) -> Self {
        let receiver = receiver.trim();
        if !receiver.is_empty() {
            self.receiver = receiver.to_string();
        }
        self
    }
}

/// Split a comma separated extension list: `" ts, .tsx,,"` -> `["ts", "tsx"]`
pub fn parse_extensions(list: &str) -> Vec<String> {
    list.split(',')
        .map(|ext| ext.trim().trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
        .collect()
}

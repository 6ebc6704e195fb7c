//! Location cache
//!
//! Persists the resolved location map together with the modification time of
//! every file it was derived from. Invalidation is all-or-nothing: if any
//! enumerated file is new or newer than its recorded timestamp, the whole map
//! is rebuilt from every file, so stale and fresh entries never coexist.

use crate::discovery::SourceFile;
use crate::error::{LocateError, Result};
use crate::extractors::base::{LocationMap, LocationRecord};
use crate::extractors::manager::{ExtractorManager, SyntaxParser};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File path -> modification time (epoch milliseconds)
pub type FileTimestamps = BTreeMap<PathBuf, u64>;

/// In-memory cache contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheState {
    pub file_timestamps: FileTimestamps,
    pub locations: LocationMap,
}

/// On-disk layout: maps written as lists of pairs
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheRecord {
    file_info: Vec<(PathBuf, u64)>,
    location_data: Vec<(String, LocationRecord)>,
}

impl From<CacheRecord> for CacheState {
    fn from(record: CacheRecord) -> Self {
        Self {
            file_timestamps: record.file_info.into_iter().collect(),
            locations: record.location_data.into_iter().collect(),
        }
    }
}

/// A cache file for one project
#[derive(Debug, Clone)]
pub struct LocationCache {
    path: PathBuf,
}

impl LocationCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state
    ///
    /// Never fails: with `force_empty`, or when the file is missing,
    /// unreadable or malformed, both maps come back empty.
    pub fn load(&self, force_empty: bool) -> CacheState {
        if force_empty {
            debug!("Ignoring location cache at {}", self.path.display());
            return CacheState::default();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No usable location cache at {}: {}", self.path.display(), e);
                return CacheState::default();
            }
        };

        match serde_json::from_str::<CacheRecord>(&content) {
            Ok(record) => {
                let state = CacheState::from(record);
                debug!(
                    "Loaded location cache: {} files, {} locations",
                    state.file_timestamps.len(),
                    state.locations.len()
                );
                state
            }
            Err(e) => {
                warn!(
                    "Discarding malformed location cache {}: {}",
                    self.path.display(),
                    e
                );
                CacheState::default()
            }
        }
    }

    /// Overwrite the cache file with `file_timestamps` and `locations`
    pub fn persist(&self, file_timestamps: &FileTimestamps, locations: &LocationMap) -> Result<()> {
        let record = CacheRecord {
            file_info: file_timestamps
                .iter()
                .map(|(path, modified)| (path.clone(), *modified))
                .collect(),
            location_data: locations
                .iter()
                .map(|(key, record)| (key.clone(), record.clone()))
                .collect(),
        };

        let json = serde_json::to_string(&record)?;
        fs::write(&self.path, json).map_err(|e| LocateError::io(&self.path, e))?;

        debug!(
            "Persisted location cache to {} ({} files, {} locations)",
            self.path.display(),
            file_timestamps.len(),
            locations.len()
        );
        Ok(())
    }
}

/// Timestamps of the files enumerated in this run
pub fn timestamps_of(files: &[SourceFile]) -> FileTimestamps {
    files
        .iter()
        .map(|file| (file.path.clone(), file.modified))
        .collect()
}

/// True if any current file is unknown to the cache or newer than recorded
///
/// Files that disappeared since the cache was written do not count.
pub fn needs_rebuild(current: &[SourceFile], cached: &FileTimestamps) -> bool {
    current.iter().any(|file| match cached.get(&file.path) {
        Some(&recorded) => recorded < file.modified,
        None => true,
    })
}

/// Re-derive `locations` from every file, in enumeration order
///
/// The map is cleared first. The first file that fails to read or parse
/// aborts the rebuild. Invalid UTF-8 is decoded lossily, as U+FFFD.
pub fn rebuild<P: SyntaxParser>(
    manager: &mut ExtractorManager<P>,
    files: &[SourceFile],
    locations: &mut LocationMap,
) -> Result<()> {
    locations.clear();

    for file in files {
        let bytes = fs::read(&file.path).map_err(|e| LocateError::io(&file.path, e))?;
        let content = String::from_utf8_lossy(&bytes);
        manager.extract_locations(locations, &file.path, &content)?;
    }

    info!(
        "Rebuilt location map: {} locations from {} files",
        locations.len(),
        files.len()
    );
    Ok(())
}

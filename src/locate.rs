//! One resolution run
//!
//! enumerate -> rebuild if anything changed -> resolve -> persist. A failure
//! at any step before persisting aborts the run and leaves the cache file
//! untouched.

use crate::cache::{needs_rebuild, rebuild, timestamps_of, LocationCache};
use crate::config::LocateConfig;
use crate::discovery::discover_source_files;
use crate::error::{LocateError, Result};
use crate::extractors::base::LocationRecord;
use crate::extractors::manager::ExtractorManager;
use crate::resolver::resolve;
use tracing::{debug, info};

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateOutcome {
    /// Location of the requested symbol, if it is declared
    pub location: Option<LocationRecord>,
    /// Whether the location map was re-derived from source
    pub rebuilt: bool,
    /// Number of files enumerated
    pub file_count: usize,
}

/// Resolve `config.symbol`, refreshing and persisting `cache` along the way
pub fn locate(config: &LocateConfig, cache: &LocationCache) -> Result<LocateOutcome> {
    if !config.source_dir.is_dir() {
        return Err(LocateError::SourceRootMissing(config.source_dir.clone()));
    }

    let mut state = cache.load(config.force_rebuild);
    let files = discover_source_files(&config.source_dir, &config.extensions)?;

    let rebuilt = needs_rebuild(&files, &state.file_timestamps);
    if rebuilt {
        info!(
            "Source changes detected, re-indexing {} files under {}",
            files.len(),
            config.source_dir.display()
        );
        let mut manager = ExtractorManager::new(&config.receiver);
        rebuild(&mut manager, &files, &mut state.locations)?;
    } else {
        debug!("Location cache is up to date ({} files)", files.len());
    }

    let location = resolve(&state.locations, &config.symbol).cloned();
    if location.is_none() {
        debug!("No declaration found for '{}'", config.symbol);
    }

    cache.persist(&timestamps_of(&files), &state.locations)?;

    Ok(LocateOutcome {
        location,
        rebuilt,
        file_count: files.len(),
    })
}

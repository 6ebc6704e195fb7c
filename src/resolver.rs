//! Symbol key lookup
//!
//! Exact, case-sensitive lookup of one symbol key. A miss is not an error.

use crate::extractors::base::{LocationMap, LocationRecord};
use std::io::{self, Write};

/// Look up `symbol` in `locations`
pub fn resolve<'a>(locations: &'a LocationMap, symbol: &str) -> Option<&'a LocationRecord> {
    locations.get(symbol)
}

/// Write the `<fileName>:<line>:<column>` line for a hit, nothing for a miss
pub fn write_resolution<W: Write>(out: &mut W, location: Option<&LocationRecord>) -> io::Result<()> {
    if let Some(location) = location {
        writeln!(out, "{}", location)?;
    }
    Ok(())
}

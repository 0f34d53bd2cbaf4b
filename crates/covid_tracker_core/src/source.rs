//! Reading a saved locations payload.
//!
//! Accepts the `/v2/locations` response of the coronavirus tracker API
//! (`{"latest": {...}, "locations": [...]}`) or a bare array of locations.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::Location;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid locations payload: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Wrapped {
    locations: Vec<Location>,
}

/// Parse a payload string into display-ordered locations.
///
/// The shape is picked from the first non-blank character: `[` is a bare
/// array, anything else is read as the wrapped API response. Errors come from
/// that single parse, so they point at the offending line and field.
pub fn parse_locations(json: &str) -> Result<Vec<Location>, SourceError> {
    if json.trim_start().starts_with('[') {
        Ok(serde_json::from_str(json)?)
    } else {
        let wrapped: Wrapped = serde_json::from_str(json)?;
        Ok(wrapped.locations)
    }
}

/// Read and parse the payload at `path`.
pub fn load_locations(path: &Path) -> Result<Vec<Location>, SourceError> {
    let json = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_locations(&json)
}

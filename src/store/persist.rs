//! Persistence and versioned import/export
//!
//! The whole state is written as one pretty-printed JSON document wrapped in a
//! versioned envelope. Export produces the same document; import validates the
//! version explicitly so a future layout change has a migration hook instead
//! of silently misreading fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::state::{ProgressState, STATE_VERSION};
use crate::error::StoreError;

/// Default filename for exported progress
pub const EXPORT_FILE_NAME: &str = "ai-roadmap-progress.json";

/// The on-disk / exported envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct SavedProgress {
    /// The full progress state
    pub state: ProgressState,
    /// Layout version, checked on import
    pub version: u32,
}

/// Serialize state into the versioned export document.
pub fn to_json(state: &ProgressState) -> Result<String, StoreError> {
    let envelope = SavedProgress { state: state.clone(), version: STATE_VERSION };
    serde_json::to_string_pretty(&envelope).map_err(StoreError::Serialize)
}

/// Parse an export document, validating the version.
///
/// Fields absent from older exports fall back to their defaults; a version
/// this build does not understand is rejected outright.
pub fn from_json(json: &str) -> Result<ProgressState, StoreError> {
    let envelope: SavedProgress =
        serde_json::from_str(json).map_err(StoreError::MalformedImport)?;
    if envelope.version != STATE_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: envelope.version,
            expected: STATE_VERSION,
        });
    }
    Ok(envelope.state)
}

/// Write the full state to the progress file.
pub fn write_state(path: &Path, state: &ProgressState) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| StoreError::Storage { path: path.to_path_buf(), source })?;
    }
    let contents = to_json(state)?;
    fs::write(path, contents)
        .map_err(|source| StoreError::Storage { path: path.to_path_buf(), source })
}

/// Read state from the progress file.
///
/// Returns `None` when the file is absent or unreadable; the caller falls
/// back to catalog defaults.
pub fn read_state(path: &Path) -> Option<ProgressState> {
    if !path.exists() {
        return None;
    }
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("could not read progress file {path:?}: {err}");
            return None;
        }
    };
    match from_json(&contents) {
        Ok(state) => Some(state),
        Err(err) => {
            warn!("could not parse progress file {path:?}: {err}");
            None
        }
    }
}

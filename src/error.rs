//! Error types for the progress store

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while mutating or persisting progress
#[derive(Debug, Error)]
pub enum StoreError {
    /// Imported text is not valid JSON or lacks the expected shape
    #[error("import is not valid JSON: {0}")]
    MalformedImport(#[source] serde_json::Error),

    /// Imported document was written by an incompatible version
    #[error("unsupported progress version {found} (this build reads version {expected})")]
    UnsupportedVersion {
        /// Version declared in the document
        found: u32,
        /// Version this build understands
        expected: u32,
    },

    /// Current state could not be serialized
    #[error("failed to serialize progress: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Progress file could not be read or written
    #[error("storage unavailable at {path}: {source}")]
    Storage {
        /// File involved
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// True for failures at the import boundary, where existing state is
    /// guaranteed untouched.
    pub fn is_import_error(&self) -> bool {
        matches!(self, StoreError::MalformedImport(_) | StoreError::UnsupportedVersion { .. })
    }
}

//! Content store error types.
//!
//! Defined in `cybered-core` so the HTTP layer can map them to status codes
//! without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading content from the store.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No module in the dataset matches the requested id.
    #[error("module not found: {0}")]
    ModuleNotFound(String),

    /// The dataset file does not exist at the configured path.
    #[error("dataset not found: {}", path.display())]
    DatasetMissing { path: PathBuf },

    /// The dataset file could not be read.
    #[error("failed to read dataset {}: {source}", path.display())]
    DatasetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset file is not valid JSON in the expected shape.
    #[error("failed to parse dataset {}: {source}", path.display())]
    DatasetInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    /// Returns `true` if this error means the caller asked for something
    /// that does not exist, as opposed to the store itself being broken.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::ModuleNotFound(_))
    }
}

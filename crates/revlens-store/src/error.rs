use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("store file not found: {path}")]
    NotFound { path: String },

    #[error("malformed row in {path}: {reason}")]
    Malformed { path: String, reason: String },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// A best-effort read that could not complete.
///
/// Dedup and frequency lookups degrade to "nothing existing" on this error
/// instead of failing the caller; the backing file is left untouched.
#[derive(Debug, Error)]
#[error("failed to read {path}: {reason}")]
pub struct StoreReadFailure {
    pub path: String,
    pub reason: String,
}

impl StoreReadFailure {
    pub(crate) fn new(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

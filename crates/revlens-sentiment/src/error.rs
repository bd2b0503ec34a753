use revlens_store::StoreError;
use thiserror::Error;

use crate::sources::SearchError;

#[derive(Debug, Error)]
pub enum SentimentError {
    /// Nothing has been collected yet; run collection first.
    #[error("{path} not found; collect reviews before analyzing")]
    NotFound { path: String },

    #[error("collected reviews are missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("product name must be non-empty")]
    EmptyProduct,

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

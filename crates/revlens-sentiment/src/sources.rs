//! Seams to the external search collaborator.
//!
//! Issuing queries is out of this crate's hands: implementors hand back
//! already-fetched results, and trust filtering of result URLs is applied by
//! [`crate::collect::fetch_and_save_reviews`] on top of whatever the
//! collaborator does.

use revlens_core::SearchResult;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("search failed: {0}")]
pub struct SearchError(pub String);

/// Supplies `{url, snippet}` results for a review query.
pub trait ReviewSearch {
    /// # Errors
    ///
    /// Returns [`SearchError`] if the collaborator cannot produce results.
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>, SearchError>;
}

/// Supplies free-text result titles for trending extraction.
pub trait TitleSearch {
    /// # Errors
    ///
    /// Returns [`SearchError`] if the collaborator cannot produce titles.
    fn titles(&self, queries: &[String]) -> Result<Vec<String>, SearchError>;
}

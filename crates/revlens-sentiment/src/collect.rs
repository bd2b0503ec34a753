//! Collection pipeline: external search results in, deduplicated raw
//! review rows out.

use revlens_core::{Catalog, RawReview, SearchResult};
use revlens_store::{ReviewStore, StoreError};

use crate::error::SentimentError;
use crate::sources::ReviewSearch;

/// Counts reported by one collection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    pub saved: usize,
    pub skipped: usize,
    pub total_found: usize,
}

/// Search query issued for a product.
#[must_use]
pub fn review_query(product: &str) -> String {
    format!("{product} reviews")
}

/// Collapse newlines to spaces and trim.
#[must_use]
pub fn clean_snippet(snippet: &str) -> String {
    snippet.replace(['\r', '\n'], " ").trim().to_string()
}

/// Persist search results for `product` as raw reviews, skipping URLs
/// already stored.
///
/// Each row's site is the first trusted domain contained in its URL, or
/// `"Unknown"`. An empty `results` slice yields all-zero counts.
///
/// # Errors
///
/// Returns [`StoreError`] if the collected table cannot be written.
pub fn save_reviews(
    store: &ReviewStore,
    catalog: &Catalog,
    product: &str,
    results: &[SearchResult],
) -> Result<CollectionSummary, StoreError> {
    let rows: Vec<RawReview> = results
        .iter()
        .map(|r| RawReview {
            product: product.to_string(),
            site: catalog.site_label(&r.url).to_string(),
            url: r.url.clone(),
            snippet: r.snippet.clone(),
        })
        .collect();

    let appended = store.append_new(&rows)?;
    Ok(CollectionSummary {
        saved: appended.saved,
        skipped: appended.skipped,
        total_found: results.len(),
    })
}

/// Query the search collaborator for `product` and persist trusted results.
///
/// Results with a blank URL or a URL outside the catalog's trusted sites are
/// dropped before counting.
///
/// # Errors
///
/// Returns [`SentimentError::EmptyProduct`] for a blank product name,
/// [`SentimentError::Search`] if the collaborator fails, or
/// [`SentimentError::Store`] if persisting fails.
pub fn fetch_and_save_reviews(
    search: &dyn ReviewSearch,
    store: &ReviewStore,
    catalog: &Catalog,
    product: &str,
    max_results: usize,
) -> Result<CollectionSummary, SentimentError> {
    let product = product.trim();
    if product.is_empty() {
        return Err(SentimentError::EmptyProduct);
    }

    let query = review_query(product);
    let results: Vec<SearchResult> = search
        .search(&query, max_results)?
        .into_iter()
        .filter(|r| !r.url.trim().is_empty() && catalog.is_trusted(&r.url))
        .map(|r| SearchResult {
            snippet: clean_snippet(&r.snippet),
            url: r.url,
        })
        .collect();

    let summary = save_reviews(store, catalog, product, &results)?;
    tracing::info!(
        product,
        saved = summary.saved,
        skipped = summary.skipped,
        total_found = summary.total_found,
        "review collection complete"
    );
    Ok(summary)
}

/// Results requested when looking for a shop page.
pub const BUY_LINK_RESULTS: usize = 5;

/// Marketplaces whose product pages count as a buy link.
const STORE_MARKERS: &[&str] = &["amazon", "flipkart"];

/// Search query issued when looking for a shop page for `product`.
#[must_use]
pub fn buy_link_query(product: &str) -> String {
    format!("{product} buy site:amazon.in OR site:flipkart.com")
}

/// First result URL pointing at a marketplace listing for `product`.
///
/// Best effort: a blank product, a failed search, or no marketplace URL all
/// yield `None`.
#[must_use]
pub fn buy_link(search: &dyn ReviewSearch, product: &str) -> Option<String> {
    let product = product.trim();
    if product.is_empty() {
        return None;
    }

    match search.search(&buy_link_query(product), BUY_LINK_RESULTS) {
        Ok(results) => results
            .into_iter()
            .take(BUY_LINK_RESULTS)
            .map(|r| r.url)
            .find(|url| STORE_MARKERS.iter().any(|m| url.contains(m))),
        Err(e) => {
            tracing::warn!(product, error = %e, "buy link search failed");
            None
        }
    }
}

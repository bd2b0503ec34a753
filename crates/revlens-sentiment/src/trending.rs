//! Trending product names from search-result titles.
//!
//! Three tiers, each falling through to the next on failure or no output:
//! titles from the search collaborator, then product frequency in the
//! collected table, then the catalog's static fallback list.

use std::collections::HashSet;
use std::sync::LazyLock;

use rand::seq::IndexedRandom;
use rand::Rng;
use regex::Regex;
use revlens_core::Catalog;
use revlens_store::ReviewStore;

use crate::sources::TitleSearch;

/// Tokens longer than this many words are discarded.
const MAX_TOKEN_WORDS: usize = 5;

/// Trailing words that describe the article rather than the product.
const EDITORIAL_WORDS: &[&str] = &["Review", "Reviews", "Specs", "Price"];

static PIPE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\|.*$").expect("valid pipe suffix regex"));

static GSMARENA_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*GSMArena.*$").expect("valid gsmarena suffix regex"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[–—\-:|]").expect("valid separator regex"));

static MODEL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z]?[A-Z][A-Za-z]+(?:\s+[A-Za-z0-9]+){0,3}").expect("valid model token regex")
});

fn strip_editorial_tail(token: &str) -> String {
    let mut words: Vec<&str> = token.split_whitespace().collect();
    while words.len() > 1 && words.last().is_some_and(|w| EDITORIAL_WORDS.contains(w)) {
        words.pop();
    }
    words.join(" ")
}

/// Candidate model names in one title.
///
/// Drops `" | ..."` and `"- GSMArena..."` suffixes, keeps the text before the
/// first dash, colon, or pipe, then keeps capitalized word runs that mention
/// a catalog brand.
#[must_use]
pub fn extract_models_from_title(title: &str, catalog: &Catalog) -> Vec<String> {
    let title = PIPE_SUFFIX.replace(title, "");
    let title = GSMARENA_SUFFIX.replace(&title, "");
    let head = SEPARATORS.split(&title).next().unwrap_or("").trim();

    MODEL_TOKEN
        .find_iter(head)
        .map(|m| strip_editorial_tail(m.as_str()))
        .filter(|token| {
            catalog.mentions_brand(token) && token.split_whitespace().count() <= MAX_TOKEN_WORDS
        })
        .collect()
}

/// Candidates across all titles, deduplicated case-insensitively in
/// first-seen order and truncated to `limit`.
#[must_use]
pub fn extract_trending(titles: &[String], catalog: &Catalog, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    titles
        .iter()
        .flat_map(|t| extract_models_from_title(t, catalog))
        .filter(|m| seen.insert(m.to_lowercase()))
        .take(limit)
        .collect()
}

/// Ranked trending product names. Never fails.
///
/// `source` is `None` when no title collaborator is available; extraction
/// then starts at the collected-table tier. The static tier guarantees
/// `min(limit, fallback_products.len())` names.
#[must_use]
pub fn trending_products(
    source: Option<&dyn TitleSearch>,
    store: &ReviewStore,
    catalog: &Catalog,
    limit: usize,
) -> Vec<String> {
    if let Some(source) = source {
        match source.titles(&catalog.trending_queries) {
            Ok(titles) => {
                let models = extract_trending(&titles, catalog, limit);
                if !models.is_empty() {
                    tracing::debug!(count = models.len(), "trending from search titles");
                    return models;
                }
                tracing::info!(
                    titles = titles.len(),
                    "no model names in search titles; falling back to collected history"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "title search failed; falling back to collected history");
            }
        }
    }

    match store.product_frequencies() {
        Ok(ranked) if !ranked.is_empty() => {
            return ranked.into_iter().take(limit).map(|(p, _)| p).collect();
        }
        Ok(_) => tracing::info!("collected history is empty; using static fallback"),
        Err(e) => tracing::warn!(error = %e, "collected history unreadable; using static fallback"),
    }

    catalog.fallback_products.iter().take(limit).cloned().collect()
}

/// Pick one product uniformly at random.
#[must_use]
pub fn pick_random<'a, R: Rng + ?Sized>(products: &'a [String], rng: &mut R) -> Option<&'a str> {
    products.choose(rng).map(String::as_str)
}

#[cfg(test)]
#[path = "trending_test.rs"]
mod tests;

//! Review records shared by the store, the pipelines, and the CLI.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separator joining `product` and `review` into an analyzed-row identity key.
pub const ANALYZED_KEY_SEPARATOR: &str = "||";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Positive" => Ok(Sentiment::Positive),
            "Negative" => Ok(Sentiment::Negative),
            "Neutral" => Ok(Sentiment::Neutral),
            other => Err(format!("unknown sentiment label '{other}'")),
        }
    }
}

/// One `{url, snippet}` pair handed over by the search collaborator.
///
/// Accepts DuckDuckGo-style `href`/`body` keys as well. When both `href` and
/// `url` are present, a non-empty `href` wins; likewise `body` over `snippet`.
/// A result with neither key deserializes with an empty `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SearchResultFields")]
pub struct SearchResult {
    pub url: String,
    pub snippet: String,
}

#[derive(Deserialize)]
struct SearchResultFields {
    url: Option<String>,
    href: Option<String>,
    snippet: Option<String>,
    body: Option<String>,
}

fn first_non_empty(preferred: Option<String>, fallback: Option<String>) -> String {
    preferred
        .filter(|v| !v.is_empty())
        .or(fallback)
        .unwrap_or_default()
}

impl From<SearchResultFields> for SearchResult {
    fn from(fields: SearchResultFields) -> Self {
        Self {
            url: first_non_empty(fields.href, fields.url),
            snippet: first_non_empty(fields.body, fields.snippet),
        }
    }
}

/// An unanalyzed snippet harvested from a trusted source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReview {
    pub product: String,
    pub site: String,
    pub url: String,
    pub snippet: String,
}

impl RawReview {
    /// Dedup key within the raw store. Global across products.
    #[must_use]
    pub fn identity_key(&self) -> &str {
        &self.url
    }
}

/// A raw review annotated with sentiment, pros, cons, improvement
/// suggestions, and the verdict of the batch it was analyzed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedReview {
    pub product: String,
    pub review: String,
    pub sentiment: Sentiment,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub improvements: Vec<String>,
    pub verdict: String,
}

impl AnalyzedReview {
    #[must_use]
    pub fn identity_key(&self) -> String {
        analyzed_identity_key(&self.product, &self.review)
    }
}

/// Join `product` and `review` into the analyzed-store identity key.
#[must_use]
pub fn analyzed_identity_key(product: &str, review: &str) -> String {
    format!("{product}{ANALYZED_KEY_SEPARATOR}{review}")
}

//! Review collection and lexicon sentiment analysis.
//!
//! Collection turns search results for a product into deduplicated raw rows.
//! Analysis labels each collected review, extracts pros, cons, and
//! improvement suggestions, and stamps one batch verdict on every row.
//! Trending extraction ranks product names from search titles, falling back
//! to collected history and then a static list.

pub mod analyze;
pub mod classifier;
pub mod collect;
pub mod error;
pub mod history;
pub mod scorer;
pub mod sources;
pub mod trending;
pub mod verdict;

pub use analyze::{analyze_reviews, AnalysisReport};
pub use classifier::{classify, Classification};
pub use collect::{buy_link, fetch_and_save_reviews, save_reviews, CollectionSummary};
pub use error::SentimentError;
pub use history::{latest_analysis, HistoryEntry};
pub use scorer::lexicon_score;
pub use sources::{ReviewSearch, SearchError, TitleSearch};
pub use trending::{extract_models_from_title, extract_trending, pick_random, trending_products};
pub use verdict::{build_verdict, Mood, SentimentCounts, Verdict};

//! Analysis pipeline orchestration.

use revlens_core::AnalyzedReview;
use revlens_store::{AppendSummary, RecordKind, ReviewStore};

use crate::classifier::{classify, union_in_order, Classification, CONS, PROS};
use crate::error::SentimentError;
use crate::verdict::{build_verdict, SentimentCounts, Verdict};

/// Columns the collected table must carry after normalization.
const REQUIRED_COLUMNS: &[&str] = &["product", "review"];

/// Result of one analysis run over the (optionally filtered) collected set.
#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    /// Every analyzed row, whether or not it was newly persisted.
    pub reviews: Vec<AnalyzedReview>,
    /// `None` when the filtered set was empty.
    pub verdict: Option<Verdict>,
    pub counts: SentimentCounts,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub persisted: AppendSummary,
}

impl AnalysisReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

/// Run the full analysis pipeline.
///
/// 1. Load the collected table; fail if it has never been created.
/// 2. Keep rows whose product equals `product_filter` case-insensitively
///    (a blank filter keeps everything).
/// 3. Classify each row.
/// 4. Build one verdict over the whole filtered set and stamp it on every row.
/// 5. Append rows not yet in the analyzed table.
///
/// An empty collected table, or a filter that matches nothing, produces an
/// empty report without touching the analyzed table.
///
/// # Errors
///
/// Returns [`SentimentError::NotFound`] if nothing has been collected yet,
/// [`SentimentError::Schema`] if `product` or `review` columns are missing,
/// or [`SentimentError::Store`] if reading or writing a table fails.
pub fn analyze_reviews(
    store: &ReviewStore,
    product_filter: Option<&str>,
) -> Result<AnalysisReport, SentimentError> {
    if !store.exists(RecordKind::Raw) {
        return Err(SentimentError::NotFound {
            path: store.path(RecordKind::Raw).display().to_string(),
        });
    }

    let table = store.read_table(RecordKind::Raw)?;
    if table.is_empty() {
        tracing::info!("collected table is empty; nothing to analyze");
        return Ok(AnalysisReport::default());
    }

    let missing = table.missing_columns(REQUIRED_COLUMNS);
    if !missing.is_empty() {
        return Err(SentimentError::Schema { missing });
    }

    let filter = product_filter
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase);

    let classified: Vec<(String, String, Classification)> = table
        .rows()
        .iter()
        .map(|row| (table.value(row, "product"), table.value(row, "review")))
        .filter(|(product, _)| {
            filter
                .as_deref()
                .is_none_or(|f| product.to_lowercase() == f)
        })
        .map(|(product, review)| (product.to_string(), review.to_string(), classify(review)))
        .collect();

    if classified.is_empty() {
        tracing::info!(filter = ?product_filter, "no collected reviews match the filter");
        return Ok(AnalysisReport::default());
    }

    let counts: SentimentCounts = classified.iter().map(|(_, _, c)| c.sentiment).collect();
    let verdict = build_verdict(&counts);
    let verdict_text = verdict.to_string();

    let reviews: Vec<AnalyzedReview> = classified
        .into_iter()
        .map(|(product, review, c)| AnalyzedReview {
            product,
            review,
            sentiment: c.sentiment,
            pros: c.pros,
            cons: c.cons,
            improvements: c.improvements,
            verdict: verdict_text.clone(),
        })
        .collect();

    let persisted = store.append_new(&reviews)?;

    let pros = union_in_order(PROS, reviews.iter().map(|r| r.pros.as_slice()));
    let cons = union_in_order(CONS, reviews.iter().map(|r| r.cons.as_slice()));

    tracing::info!(
        filter = ?product_filter,
        rows = reviews.len(),
        saved = persisted.saved,
        skipped = persisted.skipped,
        verdict = %verdict_text,
        "analysis complete"
    );

    Ok(AnalysisReport {
        reviews,
        verdict: Some(verdict),
        counts,
        pros,
        cons,
        persisted,
    })
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;

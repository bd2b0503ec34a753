//! Most recent analysis, read back from the analyzed table.

use revlens_core::AnalyzedReview;
use revlens_store::{ReviewStore, StoreError};

use crate::classifier::{union_in_order, CONS, PROS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub product: String,
    /// Verdict stamped on the most recently appended row.
    pub verdict: String,
    /// Every stored row for `product`, in file order.
    pub reviews: Vec<AnalyzedReview>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// The product of the last analyzed row, with all of its stored rows.
///
/// Returns `Ok(None)` when the analyzed table is missing or empty.
///
/// # Errors
///
/// Returns [`StoreError`] if the analyzed table cannot be parsed.
pub fn latest_analysis(store: &ReviewStore) -> Result<Option<HistoryEntry>, StoreError> {
    let rows = store.load_analyzed()?;
    let Some(latest) = rows.last() else {
        return Ok(None);
    };

    let product = latest.product.clone();
    let verdict = latest.verdict.clone();
    let reviews: Vec<AnalyzedReview> = rows.into_iter().filter(|r| r.product == product).collect();

    let pros = union_in_order(PROS, reviews.iter().map(|r| r.pros.as_slice()));
    let cons = union_in_order(CONS, reviews.iter().map(|r| r.cons.as_slice()));

    Ok(Some(HistoryEntry {
        product,
        verdict,
        reviews,
        pros,
        cons,
    }))
}

#[cfg(test)]
mod tests {
    use revlens_core::RawReview;

    use super::*;
    use crate::analyze::analyze_reviews;

    fn raw(product: &str, url: &str, snippet: &str) -> RawReview {
        RawReview {
            product: product.to_string(),
            site: "gsmarena.com".to_string(),
            url: url.to_string(),
            snippet: snippet.to_string(),
        }
    }

    #[test]
    fn empty_history_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReviewStore::in_dir(dir.path());
        assert!(latest_analysis(&store).unwrap().is_none());
    }

    #[test]
    fn latest_product_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReviewStore::in_dir(dir.path());
        store
            .append_new(&[
                raw("PhoneX", "https://a", "Great battery"),
                raw("PhoneY", "https://b", "Bad lag issue"),
                raw("PhoneY", "https://c", "Slow camera"),
            ])
            .unwrap();
        analyze_reviews(&store, Some("PhoneX")).unwrap();
        analyze_reviews(&store, Some("PhoneY")).unwrap();

        let entry = latest_analysis(&store).unwrap().unwrap();
        assert_eq!(entry.product, "PhoneY");
        assert_eq!(entry.reviews.len(), 2);
        assert!(entry.verdict.starts_with("Mostly Negative"));
        assert_eq!(entry.pros, vec!["camera"]);
        assert_eq!(entry.cons, vec!["bad", "slow", "issue", "lag"]);
    }
}

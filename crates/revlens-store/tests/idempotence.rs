//! Appending the same batch twice leaves the table as if it were appended once.

use revlens_core::{AnalyzedReview, RawReview, Sentiment};
use revlens_store::{AppendSummary, RecordKind, ReviewStore};

fn raw_batch() -> Vec<RawReview> {
    ["https://www.gsmarena.com/a.php", "https://www.techradar.com/b"]
        .iter()
        .map(|url| RawReview {
            product: "PhoneX".to_string(),
            site: "gsmarena.com".to_string(),
            url: (*url).to_string(),
            snippet: "Great battery and camera".to_string(),
        })
        .collect()
}

fn analyzed_batch() -> Vec<AnalyzedReview> {
    ["Great battery and camera", "Bad lag issue"]
        .iter()
        .map(|review| AnalyzedReview {
            product: "PhoneX".to_string(),
            review: (*review).to_string(),
            sentiment: Sentiment::Neutral,
            pros: vec![],
            cons: vec![],
            improvements: vec![],
            verdict: "Mixed — 50.0% Positive, 50.0% Negative, 0.0% Neutral".to_string(),
        })
        .collect()
}

#[test]
fn raw_append_twice_matches_append_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = ReviewStore::in_dir(dir.path());

    store.append_new(&raw_batch()).unwrap();
    let after_once = store.read_table(RecordKind::Raw).unwrap().len();

    let again = store.append_new(&raw_batch()).unwrap();
    let after_twice = store.read_table(RecordKind::Raw).unwrap().len();

    assert_eq!(again, AppendSummary { saved: 0, skipped: 2 });
    assert_eq!(after_once, after_twice);
}

#[test]
fn analyzed_append_twice_matches_append_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = ReviewStore::in_dir(dir.path());

    store.append_new(&analyzed_batch()).unwrap();
    store.append_new(&analyzed_batch()).unwrap();

    assert_eq!(store.load_analyzed().unwrap().len(), 2);
}

#[test]
fn header_written_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = ReviewStore::in_dir(dir.path());
    store.append_new(&raw_batch()).unwrap();
    store.append_new(&raw_batch()).unwrap();

    let content = std::fs::read_to_string(store.path(RecordKind::Raw)).unwrap();
    assert_eq!(content.matches("Product,Site,URL,Review").count(), 1);
}

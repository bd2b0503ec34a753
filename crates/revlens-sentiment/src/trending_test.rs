use rand::rngs::StdRng;
use rand::SeedableRng;
use revlens_core::RawReview;

use super::*;
use crate::sources::SearchError;

struct CannedTitles(Vec<String>);

impl TitleSearch for CannedTitles {
    fn titles(&self, _queries: &[String]) -> Result<Vec<String>, SearchError> {
        Ok(self.0.clone())
    }
}

struct FailingTitles;

impl TitleSearch for FailingTitles {
    fn titles(&self, _queries: &[String]) -> Result<Vec<String>, SearchError> {
        Err(SearchError("rate limited".to_string()))
    }
}

fn titles(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn raw(product: &str, url: &str) -> RawReview {
    RawReview {
        product: product.to_string(),
        site: "gsmarena.com".to_string(),
        url: url.to_string(),
        snippet: "fine".to_string(),
    }
}

// -----------------------------------------------------------------------
// title extraction
// -----------------------------------------------------------------------

#[test]
fn extracts_models_from_editorial_titles() {
    let catalog = Catalog::default();
    let found = extract_trending(
        &titles(&[
            "iPhone 16 Pro Review - GSMArena.com",
            "Samsung Galaxy S25 | Tom's Guide",
        ]),
        &catalog,
        8,
    );
    assert_eq!(found, vec!["iPhone 16 Pro", "Samsung Galaxy S25"]);
}

#[test]
fn text_after_first_separator_is_ignored() {
    let catalog = Catalog::default();
    let found = extract_models_from_title("Google Pixel 9: Samsung beats it", &catalog);
    assert_eq!(found, vec!["Google Pixel 9"]);
}

#[test]
fn tokens_without_a_brand_are_dropped() {
    let catalog = Catalog::default();
    assert!(extract_models_from_title("Best Phones Of The Year", &catalog).is_empty());
}

#[test]
fn candidates_dedup_case_insensitively_and_truncate() {
    let catalog = Catalog::default();
    let found = extract_trending(
        &titles(&[
            "OnePlus 12 Review",
            "ONEPLUS 12 | Verge",
            "Xiaomi 14 Specs",
            "Sony Xperia 1",
        ]),
        &catalog,
        2,
    );
    assert_eq!(found, vec!["OnePlus 12", "Xiaomi 14"]);
}

// -----------------------------------------------------------------------
// fallback tiers
// -----------------------------------------------------------------------

#[test]
fn title_tier_wins_when_it_yields_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = ReviewStore::in_dir(dir.path());
    store.append_new(&[raw("PhoneX", "https://a")]).unwrap();
    let source: &dyn TitleSearch = &CannedTitles(titles(&["Samsung Galaxy S25 | Tom's Guide"]));

    let found = trending_products(Some(source), &store, &Catalog::default(), 8);
    assert_eq!(found, vec!["Samsung Galaxy S25"]);
}

#[test]
fn empty_titles_fall_back_to_collected_frequency() {
    let dir = tempfile::tempdir().unwrap();
    let store = ReviewStore::in_dir(dir.path());
    store
        .append_new(&[
            raw("PhoneX", "https://a"),
            raw("PhoneY", "https://b"),
            raw("PhoneY", "https://c"),
        ])
        .unwrap();
    let source: &dyn TitleSearch = &CannedTitles(Vec::new());

    let found = trending_products(Some(source), &store, &Catalog::default(), 8);
    assert_eq!(found, vec!["PhoneY", "PhoneX"]);
}

#[test]
fn failing_source_falls_back_to_collected_frequency() {
    let dir = tempfile::tempdir().unwrap();
    let store = ReviewStore::in_dir(dir.path());
    store.append_new(&[raw("PhoneX", "https://a")]).unwrap();

    let source: &dyn TitleSearch = &FailingTitles;

    let found = trending_products(Some(source), &store, &Catalog::default(), 8);
    assert_eq!(found, vec!["PhoneX"]);
}

#[test]
fn empty_store_returns_static_list_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let store = ReviewStore::in_dir(dir.path());
    let catalog = Catalog::default();
    let source: &dyn TitleSearch = &CannedTitles(titles(&["nothing useful here"]));

    let found = trending_products(Some(source), &store, &catalog, 3);
    assert_eq!(found, catalog.fallback_products[..3].to_vec());
}

#[test]
fn no_source_and_empty_store_returns_full_static_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = ReviewStore::in_dir(dir.path());
    let catalog = Catalog::default();

    let found = trending_products(None, &store, &catalog, 50);
    assert_eq!(found, catalog.fallback_products);
}

#[test]
fn store_without_product_column_falls_back_to_static_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = ReviewStore::in_dir(dir.path());
    std::fs::write(
        store.path(revlens_store::RecordKind::Raw),
        "Site,URL\ngsmarena.com,https://a\n",
    )
    .unwrap();
    let catalog = Catalog::default();

    let found = trending_products(None, &store, &catalog, 2);
    assert_eq!(found, catalog.fallback_products[..2].to_vec());
}

// -----------------------------------------------------------------------
// random pick
// -----------------------------------------------------------------------

#[test]
fn pick_random_from_empty_is_none() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(pick_random(&[], &mut rng).is_none());
}

#[test]
fn pick_random_returns_a_member() {
    let mut rng = StdRng::seed_from_u64(7);
    let products = titles(&["PhoneX", "PhoneY", "PhoneZ"]);
    for _ in 0..20 {
        let pick = pick_random(&products, &mut rng).unwrap();
        assert!(products.iter().any(|p| p == pick));
    }
}

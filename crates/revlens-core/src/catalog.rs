use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Site label used when a URL matches none of the trusted domains.
pub const UNKNOWN_SITE: &str = "Unknown";

const DEFAULT_TRUSTED_SITES: &[&str] = &[
    "flipkart.com",
    "gsmarena.com",
    "techradar.com",
    "tomsguide.com",
    "theverge.com",
    "amazon.in",
    "91mobiles.com",
    "gadgets360.com",
    "smartprix.com",
    "pricebaba.com",
    "indiatoday.in",
];

const DEFAULT_BRANDS: &[(&str, &[&str])] = &[
    ("Apple", &["iPhone", "iPad", "MacBook"]),
    ("Samsung", &[]),
    ("Xiaomi", &[]),
    ("OnePlus", &[]),
    ("Google", &["Pixel"]),
    ("Nothing", &[]),
    ("Realme", &[]),
    ("Oppo", &[]),
    ("Vivo", &[]),
    ("Motorola", &[]),
    ("Sony", &[]),
    ("Asus", &[]),
];

const DEFAULT_FALLBACK_PRODUCTS: &[&str] = &[
    "iPhone 15",
    "Samsung Galaxy S24",
    "Google Pixel 9",
    "OnePlus 12",
    "Xiaomi 14",
    "Nothing Phone (2a)",
    "Realme GT 6",
    "Motorola Edge 50",
];

const DEFAULT_TRENDING_QUERIES: &[&str] = &[
    "best smartphones 2025",
    "trending phones 2025",
    "top phones 2025 gsmarena",
    "best phones review roundup",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandEntry {
    pub name: String,
    /// Model-line names that identify the brand on their own (e.g. `iPhone`).
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl BrandEntry {
    /// True if the brand name or any alias occurs as a substring of `token`.
    ///
    /// Case-sensitive, no word boundaries: `OnePlus` matches inside
    /// `OnePlusNord`.
    #[must_use]
    pub fn appears_in(&self, token: &str) -> bool {
        token.contains(self.name.as_str()) || self.aliases.iter().any(|a| token.contains(a.as_str()))
    }
}

/// Static reference data shared by collection and trending extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub trusted_sites: Vec<String>,
    pub brands: Vec<BrandEntry>,
    pub fallback_products: Vec<String>,
    #[serde(default = "default_trending_queries")]
    pub trending_queries: Vec<String>,
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_trending_queries() -> Vec<String> {
    to_owned_vec(DEFAULT_TRENDING_QUERIES)
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            trusted_sites: to_owned_vec(DEFAULT_TRUSTED_SITES),
            brands: DEFAULT_BRANDS
                .iter()
                .map(|(name, aliases)| BrandEntry {
                    name: (*name).to_string(),
                    aliases: to_owned_vec(aliases),
                })
                .collect(),
            fallback_products: to_owned_vec(DEFAULT_FALLBACK_PRODUCTS),
            trending_queries: default_trending_queries(),
        }
    }
}

impl Catalog {
    /// True if the URL contains any trusted domain.
    #[must_use]
    pub fn is_trusted(&self, url: &str) -> bool {
        self.trusted_sites.iter().any(|site| url.contains(site.as_str()))
    }

    /// The first trusted domain (in catalog order) contained in `url`, or
    /// [`UNKNOWN_SITE`].
    #[must_use]
    pub fn site_label(&self, url: &str) -> &str {
        self.trusted_sites
            .iter()
            .find(|site| url.contains(site.as_str()))
            .map_or(UNKNOWN_SITE, String::as_str)
    }

    /// True if any catalog brand appears in `token`.
    #[must_use]
    pub fn mentions_brand(&self, token: &str) -> bool {
        self.brands.iter().any(|b| b.appears_in(token))
    }
}

/// Load and validate a catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: Catalog = serde_yaml::from_str(&content)?;
    validate_catalog(&catalog)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    if catalog.trusted_sites.is_empty() {
        return Err(ConfigError::Validation(
            "at least one trusted site is required".to_string(),
        ));
    }
    // A blank entry is a substring of every URL.
    if catalog.trusted_sites.iter().any(|s| s.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "trusted_sites must not contain blank entries".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for brand in &catalog.brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }
        if brand.aliases.iter().any(|a| a.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "brand '{}' has a blank alias",
                brand.name
            )));
        }
        if !seen.insert(brand.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.name
            )));
        }
    }

    // Trending extraction relies on this list as its last resort.
    if catalog.fallback_products.is_empty() {
        return Err(ConfigError::Validation(
            "fallback_products must not be empty".to_string(),
        ));
    }
    if catalog.fallback_products.iter().any(|p| p.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "fallback_products must not contain blank entries".to_string(),
        ));
    }

    Ok(())
}

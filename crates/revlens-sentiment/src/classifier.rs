//! Per-review classification: sentiment label, pros, cons, and improvement
//! suggestions. Pure and deterministic; rows are classified independently.

use revlens_core::Sentiment;

use crate::scorer::lexicon_score;

/// Polarity above this is `Positive`.
pub const POSITIVE_THRESHOLD: f32 = 0.1;

/// Polarity below this is `Negative`.
pub const NEGATIVE_THRESHOLD: f32 = -0.1;

/// Pro keywords in canonical output order.
pub const PROS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "easy",
    "useful",
    "fast",
    "quality",
    "comfortable",
    "battery",
    "camera",
    "display",
    "value",
];

/// Con keywords in canonical output order.
pub const CONS: &[&str] = &[
    "bad",
    "slow",
    "poor",
    "difficult",
    "hard",
    "expensive",
    "problem",
    "issue",
    "worst",
    "lag",
    "heating",
    "overpriced",
    "bug",
];

/// Evaluated in order; each rule fires at most once.
const IMPROVEMENT_RULES: &[(&[&str], &str)] = &[
    (&["slow", "lag"], "Improve performance/speed."),
    (&["expensive", "overpriced"], "Reduce price / add offers."),
    (&["heating"], "Thermal optimization."),
    (&["bug", "issue", "problem"], "Stability fixes."),
    (&["poor", "bad", "worst"], "Quality/reliability improvements."),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub improvements: Vec<String>,
}

/// Map a polarity score onto a sentiment label.
#[must_use]
pub fn sentiment_label(polarity: f32) -> Sentiment {
    if polarity > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Keywords from `list` that occur anywhere in `text`, case-insensitively,
/// in `list` order.
///
/// Plain substring test: `"goodness"` contains `good`, `"debug"` contains `bug`.
#[must_use]
pub fn keywords_in(text: &str, list: &[&str]) -> Vec<String> {
    let lowered = text.to_lowercase();
    list.iter()
        .filter(|kw| lowered.contains(*kw))
        .map(|kw| (*kw).to_string())
        .collect()
}

/// Improvement suggestions implied by the detected cons.
#[must_use]
pub fn improvements_for<S: AsRef<str>>(cons: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for (triggers, suggestion) in IMPROVEMENT_RULES {
        let fires = cons.iter().any(|c| triggers.contains(&c.as_ref()));
        if fires && !out.iter().any(|s| s == suggestion) {
            out.push((*suggestion).to_string());
        }
    }
    out
}

#[must_use]
pub fn classify(text: &str) -> Classification {
    let cons = keywords_in(text, CONS);
    Classification {
        sentiment: sentiment_label(lexicon_score(text)),
        pros: keywords_in(text, PROS),
        improvements: improvements_for(&cons),
        cons,
    }
}

/// Union of keyword lists across rows, in `canonical` order.
#[must_use]
pub fn union_in_order<'a, I>(canonical: &[&str], lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut present: Vec<&str> = Vec::new();
    for list in lists {
        for item in list {
            if !present.contains(&item.as_str()) {
                present.push(item.as_str());
            }
        }
    }

    // Canonical keywords first, then anything unknown in first-seen order.
    let mut out: Vec<String> = canonical
        .iter()
        .filter(|kw| present.contains(*kw))
        .map(|kw| (*kw).to_string())
        .collect();
    out.extend(
        present
            .into_iter()
            .filter(|item| !canonical.contains(item))
            .map(ToString::to_string),
    );
    out
}

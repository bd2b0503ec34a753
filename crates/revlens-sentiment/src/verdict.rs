//! Batch-level verdict over a set of sentiment labels.
//!
//! Percentages are kept in integer tenths of a percent. `neutral` is the
//! remainder `1000 - positive - negative`, so the three shares always sum to
//! exactly 100.0%.

use revlens_core::Sentiment;

/// Share (in tenths of a percent) at or above which a mood dominates.
const MAJORITY_TENTHS: u64 = 550;

const WHOLE_TENTHS: u64 = 1000;

/// Label counts over an analyzed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

impl SentimentCounts {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }

    #[must_use]
    pub fn get(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

impl FromIterator<Sentiment> for SentimentCounts {
    fn from_iter<I: IntoIterator<Item = Sentiment>>(iter: I) -> Self {
        let mut counts = Self::default();
        for s in iter {
            counts.record(s);
        }
        counts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    MostlyPositive,
    MostlyNegative,
    Mixed,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mood::MostlyPositive => write!(f, "Mostly Positive"),
            Mood::MostlyNegative => write!(f, "Mostly Negative"),
            Mood::Mixed => write!(f, "Mixed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub mood: Mood,
    pub positive_tenths: u64,
    pub negative_tenths: u64,
    pub neutral_tenths: u64,
}

impl Verdict {
    #[must_use]
    pub fn positive_pct(&self) -> f64 {
        tenths_to_pct(self.positive_tenths)
    }

    #[must_use]
    pub fn negative_pct(&self) -> f64 {
        tenths_to_pct(self.negative_tenths)
    }

    #[must_use]
    pub fn neutral_pct(&self) -> f64 {
        tenths_to_pct(self.neutral_tenths)
    }
}

#[allow(clippy::cast_precision_loss)]
fn tenths_to_pct(tenths: u64) -> f64 {
    tenths as f64 / 10.0
}

fn fmt_tenths(tenths: u64) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} — {}% Positive, {}% Negative, {}% Neutral",
            self.mood,
            fmt_tenths(self.positive_tenths),
            fmt_tenths(self.negative_tenths),
            fmt_tenths(self.neutral_tenths),
        )
    }
}

/// `1000 * part / total`, rounded half to even.
///
/// Ties are decided on the exact ratio, not on a binary float, so a share
/// such as 1 of 2000 (exactly 0.05%) rounds to 0.0% rather than 0.1%.
fn share_in_tenths(part: u64, total: u64) -> u64 {
    let scaled = part * WHOLE_TENTHS;
    let quotient = scaled / total;
    let remainder = scaled % total;
    match (remainder * 2).cmp(&total) {
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 1 => quotient + 1,
        _ => quotient,
    }
}

/// Summarize label counts into a verdict.
///
/// An empty set is treated as a total of one, yielding
/// `Mixed — 0.0% Positive, 0.0% Negative, 100.0% Neutral`.
#[must_use]
pub fn build_verdict(counts: &SentimentCounts) -> Verdict {
    let total = counts.total().max(1);
    let positive_tenths = share_in_tenths(counts.positive, total);
    let negative_tenths =
        share_in_tenths(counts.negative, total).min(WHOLE_TENTHS - positive_tenths);
    let neutral_tenths = WHOLE_TENTHS - positive_tenths - negative_tenths;

    let mood = if positive_tenths >= MAJORITY_TENTHS {
        Mood::MostlyPositive
    } else if negative_tenths >= MAJORITY_TENTHS {
        Mood::MostlyNegative
    } else {
        Mood::Mixed
    };

    Verdict {
        mood,
        positive_tenths,
        negative_tenths,
        neutral_tenths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(positive: u64, negative: u64, neutral: u64) -> SentimentCounts {
        SentimentCounts {
            positive,
            negative,
            neutral,
        }
    }

    #[test]
    fn even_split_is_mixed() {
        let v = build_verdict(&counts(1, 1, 0));
        assert_eq!(v.mood, Mood::Mixed);
        assert_eq!(
            v.to_string(),
            "Mixed — 50.0% Positive, 50.0% Negative, 0.0% Neutral"
        );
    }

    #[test]
    fn exact_ties_round_to_even_tenth() {
        assert_eq!(share_in_tenths(1, 2000), 0);
        assert_eq!(share_in_tenths(3, 2000), 2);
        assert_eq!(share_in_tenths(1, 3), 333);
        assert_eq!(share_in_tenths(2, 3), 667);
    }

    #[test]
    fn empty_set_is_degenerate_but_valid() {
        let v = build_verdict(&SentimentCounts::default());
        assert_eq!(
            v.to_string(),
            "Mixed — 0.0% Positive, 0.0% Negative, 100.0% Neutral"
        );
    }

    #[test]
    fn fifty_five_percent_positive_is_mostly_positive() {
        let v = build_verdict(&counts(11, 4, 5));
        assert_eq!(v.positive_tenths, 550);
        assert_eq!(v.mood, Mood::MostlyPositive);
    }

    #[test]
    fn just_below_majority_is_mixed() {
        // 54.5% positive
        let v = build_verdict(&counts(109, 0, 91));
        assert_eq!(v.positive_tenths, 545);
        assert_eq!(v.mood, Mood::Mixed);
    }

    #[test]
    fn negative_majority_is_mostly_negative() {
        let v = build_verdict(&counts(1, 3, 0));
        assert_eq!(v.mood, Mood::MostlyNegative);
        assert_eq!(
            v.to_string(),
            "Mostly Negative — 25.0% Positive, 75.0% Negative, 0.0% Neutral"
        );
    }

    #[test]
    fn positive_checked_before_negative() {
        let v = build_verdict(&counts(3, 0, 0));
        assert_eq!(v.mood, Mood::MostlyPositive);
        assert_eq!(v.positive_pct(), 100.0);
    }

    #[test]
    fn thirds_round_and_neutral_takes_remainder() {
        let v = build_verdict(&counts(1, 1, 1));
        assert_eq!(v.positive_tenths, 333);
        assert_eq!(v.negative_tenths, 333);
        assert_eq!(v.neutral_tenths, 334);
        assert_eq!(
            v.to_string(),
            "Mixed — 33.3% Positive, 33.3% Negative, 33.4% Neutral"
        );
    }

    #[test]
    fn two_thirds_rounds_up() {
        let v = build_verdict(&counts(2, 1, 0));
        assert_eq!(v.positive_tenths, 667);
        assert_eq!(v.negative_tenths, 333);
        assert_eq!(v.neutral_tenths, 0);
    }

    #[test]
    fn exact_half_tenth_rounds_to_even() {
        // 1/16 = 6.25% -> 6.2
        let v = build_verdict(&counts(1, 0, 15));
        assert_eq!(v.positive_tenths, 62);
        // 3/16 = 18.75% -> 18.8
        let v = build_verdict(&counts(3, 0, 13));
        assert_eq!(v.positive_tenths, 188);
    }

    #[test]
    fn shares_always_sum_to_one_hundred() {
        for total in 1..=40_u64 {
            for positive in 0..=total {
                for negative in 0..=(total - positive) {
                    let neutral = total - positive - negative;
                    let v = build_verdict(&counts(positive, negative, neutral));
                    assert_eq!(
                        v.positive_tenths + v.negative_tenths + v.neutral_tenths,
                        1000,
                        "p={positive} n={negative} u={neutral}"
                    );
                }
            }
        }
    }

    #[test]
    fn counts_collect_from_labels() {
        let c: SentimentCounts = [
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Positive,
            Sentiment::Neutral,
        ]
        .into_iter()
        .collect();
        assert_eq!(c, counts(2, 1, 1));
        assert_eq!(c.total(), 4);
        assert_eq!(c.get(Sentiment::Positive), 2);
    }
}

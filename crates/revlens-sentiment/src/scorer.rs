//! Lexicon polarity scorer for product-review text.

/// Word polarities.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.8),
    ("good", 0.7),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("love", 0.5),
    ("loved", 0.7),
    ("perfect", 1.0),
    ("impressive", 1.0),
    ("fantastic", 0.4),
    ("superb", 1.0),
    ("brilliant", 0.9),
    ("beautiful", 0.85),
    ("smooth", 0.4),
    ("fast", 0.2),
    ("easy", 0.43),
    ("useful", 0.3),
    ("comfortable", 0.4),
    ("bright", 0.7),
    ("solid", 0.3),
    ("premium", 0.4),
    ("recommend", 0.4),
    ("worth", 0.3),
    ("happy", 0.8),
    ("reliable", 0.5),
    // Negative signals
    ("bad", -0.7),
    ("worst", -1.0),
    ("worse", -0.4),
    ("poor", -0.4),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("slow", -0.3),
    ("laggy", -0.5),
    ("lag", -0.3),
    ("expensive", -0.5),
    ("overpriced", -0.5),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("annoying", -0.8),
    ("broken", -0.4),
    ("useless", -0.5),
    ("weak", -0.375),
    ("heating", -0.2),
    ("problem", -0.2),
    ("issue", -0.2),
    ("buggy", -0.5),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "isn't", "wasn't", "don't", "doesn't", "didn't"];

const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("super", 1.3),
    ("pretty", 1.1),
    ("slightly", 0.7),
];

/// Negated words flip sign and lose half their weight.
const NEGATION_FACTOR: f32 = -0.5;

fn lookup(word: &str) -> Option<f32> {
    LEXICON
        .iter()
        .find(|&&(lex_word, _)| lex_word == word)
        .map(|&(_, weight)| weight)
}

fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphabetic() && c != '\'')
        .trim_matches('\'')
        .to_lowercase()
}

/// Score a text string using the review lexicon.
///
/// Each lexicon word contributes its weight, scaled by a directly preceding
/// intensifier and flipped by a preceding negation (up to two words back).
/// The score is the mean over matched words, clamped to `[-1.0, 1.0]`.
/// Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let words: Vec<String> = text.split_whitespace().map(normalize_word).collect();

    let mut total = 0.0_f32;
    let mut matched = 0_u16;

    for (idx, word) in words.iter().enumerate() {
        let Some(mut weight) = lookup(word) else {
            continue;
        };

        if let Some(prev) = idx.checked_sub(1).and_then(|i| words.get(i)) {
            if let Some(&(_, factor)) = INTENSIFIERS.iter().find(|&&(w, _)| w == prev) {
                weight *= factor;
            }
        }

        let window_start = idx.saturating_sub(2);
        if words[window_start..idx]
            .iter()
            .any(|w| NEGATIONS.contains(&w.as_str()))
        {
            weight *= NEGATION_FACTOR;
        }

        total += weight.clamp(-1.0, 1.0);
        matched = matched.saturating_add(1);
    }

    if matched == 0 {
        return 0.0;
    }
    (total / f32::from(matched)).clamp(-1.0, 1.0)
}

use std::collections::HashMap;

use crate::domain::profile::LanguageProfile;

/// Relative weight of each sub-score in the combined rating.
///
/// The weights sum to 1.0 and every sub-score stays inside [0, 1], so the
/// combined score is bounded by [0, 1] as well.
pub struct ScoreWeights {
    pub frequency: f64,
    pub bigram: f64,
    pub trigram: f64,
    pub coincidence: f64,
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    frequency: 0.4,
    bigram: 0.3,
    trigram: 0.2,
    coincidence: 0.1,
};

/// Rates how closely `text` resembles running text of the profiled language.
///
/// Weighted sum of four independent statistics: letter-frequency fit,
/// common-bigram coverage, common-trigram coverage, and the index of
/// coincidence. Higher is better. Pure and deterministic; degenerate inputs
/// (no letters, no n-gram windows) contribute 0 instead of failing.
pub fn combined_score(text: &str, profile: &LanguageProfile) -> f64 {
    WEIGHTS.frequency * frequency_fit(text, profile)
        + WEIGHTS.bigram * bigram_coverage(text, profile)
        + WEIGHTS.trigram * trigram_coverage(text, profile)
        + WEIGHTS.coincidence * coincidence_index(text)
}

/// Chi-squared letter-frequency fit, mapped into (0, 1].
///
/// Lower chi-squared means a closer match, so the statistic is folded through
/// `1 / (1 + chi/100)`: a perfect fit approaches 1, garbage approaches 0.
/// Returns 0.0 when the text has no letters.
pub(crate) fn frequency_fit(text: &str, profile: &LanguageProfile) -> f64 {
    let (counts, total) = letter_counts(text);
    if total == 0 {
        return 0.0;
    }

    let total = f64::from(total);
    let chi_squared: f64 = profile
        .frequencies
        .iter()
        .map(|&(letter, pct)| {
            let expected = pct / 100.0 * total;
            let observed = f64::from(counts.get(&letter).copied().unwrap_or(0));
            (observed - expected).powi(2) / expected
        })
        .sum();

    1.0 / (1.0 + chi_squared / 100.0)
}

/// Fraction of overlapping two-letter windows that are common bigrams.
pub(crate) fn bigram_coverage(text: &str, profile: &LanguageProfile) -> f64 {
    ngram_coverage(text, 2, |window| profile.is_common_bigram(window))
}

/// Fraction of overlapping three-letter windows that are common trigrams.
pub(crate) fn trigram_coverage(text: &str, profile: &LanguageProfile) -> f64 {
    ngram_coverage(text, 3, |window| profile.is_common_trigram(window))
}

/// Index of coincidence: probability that two randomly drawn letters of the
/// text are equal. Script-agnostic; no profile involved.
///
/// Returns 0.0 when the text has fewer than two letters.
pub(crate) fn coincidence_index(text: &str) -> f64 {
    let (counts, total) = letter_counts(text);
    if total <= 1 {
        return 0.0;
    }

    let pairs: f64 = counts
        .values()
        .map(|&count| f64::from(count) * f64::from(count - 1))
        .sum();
    let total = f64::from(total);

    pairs / (total * (total - 1.0))
}

fn ngram_coverage(text: &str, width: usize, is_common: impl Fn(&str) -> bool) -> f64 {
    let letters = scored_letters(text);
    if letters.len() < width {
        return 0.0;
    }

    let total = letters.len() - width + 1;
    let hits = letters
        .windows(width)
        .filter(|window| is_common(&window.iter().collect::<String>()))
        .count();

    hits as f64 / total as f64
}

// Case-folded letters of the two supported scripts, in text order.
// Everything else (spaces, digits, other scripts) is dropped so n-gram
// windows span word boundaries, matching the frequency tables' corpus model.
fn scored_letters(text: &str) -> Vec<char> {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| matches!(ch, 'a'..='z' | 'а'..='я' | 'ё'))
        .collect()
}

fn letter_counts(text: &str) -> (HashMap<char, u32>, u32) {
    let mut counts = HashMap::new();
    let mut total = 0u32;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_alphabetic() {
            *counts.entry(ch).or_insert(0u32) += 1;
            total += 1;
        }
    }

    (counts, total)
}

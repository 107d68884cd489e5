use std::fmt;

use caesar_analyzer_core::decrypt;
use serde::{Deserialize, Serialize};

use crate::domain::{
    language::detect_language,
    score::combined_score,
};

/// One decryption attempt: the shift that was tried, the text it produced,
/// and how language-like that text scored.
///
/// Candidates are value objects; ordering between them is meaningful only by
/// score, descending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecryptionCandidate {
    pub shift: i32,
    pub text: String,
    pub score: f64,
}

impl fmt::Display for DecryptionCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shift {} (score {:.3}): {}", self.shift, self.score, self.text)
    }
}

/// Recovers the most likely shift for `ciphertext`.
///
/// Detects the language, then scans every candidate shift in ascending order
/// (1..=25 for English, 1..=32 for Russian; shift 0 is never a useful guess),
/// decrypting and scoring each one. The running maximum advances only on a
/// strict improvement, so exact ties keep the first shift seen.
///
/// Never fails: input without letters degenerates to all-zero scores and
/// returns the smallest scanned shift.
#[tracing::instrument(level = "trace", skip(ciphertext))]
pub fn find_best_shift(ciphertext: &str) -> i32 {
    let language = detect_language(ciphertext);
    tracing::trace!(language = language.as_str(), "language detected");

    let profile = language.profile();
    let (best_shift, best_score) = (1..=language.max_shift())
        .map(|shift| (shift, combined_score(&decrypt(ciphertext, shift), profile)))
        .fold((1, f64::NEG_INFINITY), |best, candidate| {
            if candidate.1 > best.1 { candidate } else { best }
        });

    tracing::trace!(best_shift, best_score, "shift selected");
    best_shift
}

/// Decrypts `ciphertext` with every shift of the detected language's range
/// and returns the candidates ranked by score, best first.
///
/// The enumeration runs in ascending shift order and the sort is stable on a
/// total order over scores, so candidates with equal scores keep ascending
/// shift order. Length is 25 for English input, 32 for Russian.
#[tracing::instrument(level = "trace", skip(ciphertext))]
pub fn all_decryptions(ciphertext: &str) -> Vec<DecryptionCandidate> {
    let language = detect_language(ciphertext);
    let profile = language.profile();

    let mut candidates: Vec<DecryptionCandidate> = (1..=language.max_shift())
        .map(|shift| {
            let text = decrypt(ciphertext, shift);
            let score = combined_score(&text, profile);
            DecryptionCandidate { shift, text, score }
        })
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

/// Convenience over [`find_best_shift`]: returns the winning candidate with
/// its plaintext and score in one call.
pub fn best_decryption(ciphertext: &str) -> DecryptionCandidate {
    let language = detect_language(ciphertext);
    let shift = find_best_shift(ciphertext);
    let text = decrypt(ciphertext, shift);
    let score = combined_score(&text, language.profile());

    DecryptionCandidate { shift, text, score }
}

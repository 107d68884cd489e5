use serde::{Deserialize, Serialize};

use crate::domain::profile::{self, LanguageProfile};

/// Languages the analyzer can score against.
///
/// The set is closed: every code path dispatching on language is exhaustive,
/// and adding a variant is a compile-time event, not a string comparison.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Russian,
}

impl Language {
    /// Reference statistics used to score candidate plaintexts.
    pub fn profile(self) -> &'static LanguageProfile {
        match self {
            Language::English => &profile::ENGLISH,
            Language::Russian => &profile::RUSSIAN,
        }
    }

    /// Largest shift worth trying during analysis.
    ///
    /// One less than the language's full letter inventory (26 English,
    /// 33 Russian). The Russian bound spans all 33 letters even though the
    /// shift transform cycles over 32, so shift 32 reproduces the input.
    pub fn max_shift(self) -> i32 {
        match self {
            Language::English => 25,
            Language::Russian => 32,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Russian => "russian",
        }
    }
}

/// Guesses the language of `text` by raw script counts.
///
/// Counts case-folded characters in `а..=я` plus `ё` against `a..=z` and
/// picks whichever script has strictly more; ties and letterless input
/// resolve to English. Deliberately cheap: callers must tolerate
/// misclassification on short or mixed text.
pub fn detect_language(text: &str) -> Language {
    let mut cyrillic = 0usize;
    let mut latin = 0usize;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if matches!(ch, 'а'..='я' | 'ё') {
            cyrillic += 1;
        } else if ch.is_ascii_lowercase() {
            latin += 1;
        }
    }

    if cyrillic > latin {
        Language::Russian
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_english_text() {
        assert_eq!(detect_language("hello there"), Language::English);
    }

    #[test]
    fn detects_russian_text() {
        assert_eq!(detect_language("привет мир"), Language::Russian);
    }

    #[test]
    fn upper_case_counts_like_lower() {
        assert_eq!(detect_language("ПРИВЕТ"), Language::Russian);
        assert_eq!(detect_language("HELLO"), Language::English);
    }

    #[test]
    fn yo_counts_as_cyrillic() {
        assert_eq!(detect_language("ёёё ab"), Language::Russian);
    }

    #[test]
    fn tie_prefers_english() {
        assert_eq!(detect_language("ab аб"), Language::English);
    }

    #[test]
    fn letterless_input_prefers_english() {
        assert_eq!(detect_language("1234 !?"), Language::English);
        assert_eq!(detect_language(""), Language::English);
    }

    #[test]
    fn mixed_text_follows_majority() {
        assert_eq!(detect_language("word и ещё много русских букв"), Language::Russian);
    }
}

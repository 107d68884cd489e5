/// Reference statistics for one language: expected letter frequencies
/// (percent of running text) and curated sets of common bigrams/trigrams.
///
/// Both instances are process-wide constants, built once and never mutated,
/// so they are safe to share across threads without locking.
pub struct LanguageProfile {
    pub frequencies: &'static [(char, f64)],
    pub bigrams: &'static [&'static str],
    pub trigrams: &'static [&'static str],
}

impl LanguageProfile {
    pub fn is_common_bigram(&self, candidate: &str) -> bool {
        self.bigrams.iter().any(|&b| b == candidate)
    }

    pub fn is_common_trigram(&self, candidate: &str) -> bool {
        self.trigrams.iter().any(|&t| t == candidate)
    }
}

pub static ENGLISH: LanguageProfile = LanguageProfile {
    frequencies: &[
        ('a', 8.12),
        ('b', 1.49),
        ('c', 2.78),
        ('d', 4.25),
        ('e', 12.02),
        ('f', 2.23),
        ('g', 2.02),
        ('h', 6.09),
        ('i', 6.97),
        ('j', 0.15),
        ('k', 0.77),
        ('l', 4.03),
        ('m', 2.41),
        ('n', 6.75),
        ('o', 7.51),
        ('p', 1.93),
        ('q', 0.10),
        ('r', 5.99),
        ('s', 6.33),
        ('t', 9.06),
        ('u', 2.76),
        ('v', 0.98),
        ('w', 2.36),
        ('x', 0.15),
        ('y', 1.97),
        ('z', 0.07),
    ],
    bigrams: &["th", "he", "in", "er", "an", "re", "ed", "nd", "on", "en"],
    trigrams: &[
        "the", "and", "ing", "her", "hat", "his", "tha", "ere", "for", "ent",
    ],
};

// 33 entries: the frequency table covers ё even though the shift transform
// cycles over 32 letters.
pub static RUSSIAN: LanguageProfile = LanguageProfile {
    frequencies: &[
        ('а', 8.01),
        ('б', 1.59),
        ('в', 4.54),
        ('г', 1.70),
        ('д', 2.98),
        ('е', 8.45),
        ('ё', 0.04),
        ('ж', 0.94),
        ('з', 1.65),
        ('и', 7.35),
        ('й', 1.21),
        ('к', 3.49),
        ('л', 4.40),
        ('м', 3.21),
        ('н', 6.70),
        ('о', 10.97),
        ('п', 2.81),
        ('р', 4.73),
        ('с', 5.47),
        ('т', 6.26),
        ('у', 2.62),
        ('ф', 0.26),
        ('х', 0.97),
        ('ц', 0.48),
        ('ч', 1.44),
        ('ш', 0.73),
        ('щ', 0.36),
        ('ъ', 0.04),
        ('ы', 1.90),
        ('ь', 1.74),
        ('э', 0.32),
        ('ю', 0.64),
        ('я', 2.01),
    ],
    bigrams: &["ст", "но", "то", "на", "ен", "ра", "во", "ко", "ро", "ер"],
    trigrams: &[
        "что", "это", "как", "все", "для", "его", "она", "они", "при", "или",
    ],
};

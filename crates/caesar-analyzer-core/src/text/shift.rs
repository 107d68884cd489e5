// Cyclic rotation over fixed per-script alphabets:
// Latin (26 letters) and Cyrillic (32 letters), each in two case variants.
//
// Important: each character is shifted within its own alphabet only, so case
// and script survive any rotation. Characters outside the four alphabets are
// copied through untouched.
const ENGLISH_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const ENGLISH_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// The Cyrillic tables model 32 letters: ё/Ё has no slot and passes through.
const RUSSIAN_LOWER: &str = "абвгдежзийклмнопрстуфхцчшщъыьэюя";
const RUSSIAN_UPPER: &str = "АБВГДЕЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

/// One case variant of one supported script: an ordered cycle of unique
/// letters. The letter count is the modulus for rotation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Alphabet {
    letters: &'static str,
}

impl Alphabet {
    pub const ENGLISH_LOWER: Self = Self {
        letters: ENGLISH_LOWER,
    };
    pub const ENGLISH_UPPER: Self = Self {
        letters: ENGLISH_UPPER,
    };
    pub const RUSSIAN_LOWER: Self = Self {
        letters: RUSSIAN_LOWER,
    };
    pub const RUSSIAN_UPPER: Self = Self {
        letters: RUSSIAN_UPPER,
    };

    const ALL: [Self; 4] = [
        Self::ENGLISH_LOWER,
        Self::ENGLISH_UPPER,
        Self::RUSSIAN_LOWER,
        Self::RUSSIAN_UPPER,
    ];

    /// Number of letters in the cycle (26 for Latin, 32 for Cyrillic).
    pub fn len(self) -> usize {
        self.letters.chars().count()
    }

    pub fn is_empty(self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(self, ch: char) -> bool {
        self.letters.chars().any(|c| c == ch)
    }

    /// Rotates `ch` by `amount` positions within this alphabet.
    ///
    /// Returns `None` when `ch` is not one of this alphabet's letters.
    /// The effective rotation is normalized into `[0, len)` first, so any
    /// signed `amount` is valid and rotating by a multiple of `len` is the
    /// identity.
    fn rotate(self, ch: char, amount: i32) -> Option<char> {
        let index = self.letters.chars().position(|c| c == ch)?;
        let size = self.len() as i32;
        // Normalize before adding so extreme amounts cannot overflow.
        let offset = amount.rem_euclid(size);
        let target = (index as i32 + offset) % size;
        self.letters.chars().nth(target as usize)
    }
}

fn shift_char(ch: char, amount: i32) -> char {
    Alphabet::ALL
        .iter()
        .find_map(|alphabet| alphabet.rotate(ch, amount))
        .unwrap_or(ch)
}

/// Shifts every alphabet letter of `text` by `amount` positions with
/// wraparound; digits, punctuation, whitespace, and unsupported scripts are
/// copied unchanged.
///
/// Pure and total: any string is a valid input, including the empty string.
pub fn shift_text(text: &str, amount: i32) -> String {
    text.chars().map(|ch| shift_char(ch, amount)).collect()
}

/// Encrypts `text` with the given shift.
pub fn encrypt(text: &str, shift: i32) -> String {
    shift_text(text, shift)
}

/// Decrypts `text` that was encrypted with the given shift.
pub fn decrypt(text: &str, shift: i32) -> String {
    shift_text(text, -shift)
}

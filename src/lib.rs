pub mod analysis;
pub mod domain;

#[cfg(feature = "debug-tracing")]
mod util;

pub use analysis::{DecryptionCandidate, all_decryptions, best_decryption, find_best_shift};
pub use caesar_analyzer_core::{decrypt, encrypt, shift_text};
pub use domain::language::{Language, detect_language};

#[cfg(feature = "debug-tracing")]
pub use util::tracing::init_tracing;

#[cfg(test)]
mod tests;

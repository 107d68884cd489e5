pub mod text;

pub use text::shift::{Alphabet, decrypt, encrypt, shift_text};

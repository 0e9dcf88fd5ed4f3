pub(crate) mod counter;
pub(crate) mod types;

pub use counter::LetterCounter;
pub use types::{alphabet, letter_index, ALPHABET_LEN};

//! Latin alphabet, `a`..`z`.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::alphabet::Alphabet;
use crate::error::AlphabetError;
use crate::letters::LetterTable;
use crate::ordinal::Ordinal;

pub const LOWERCASE: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const UPPERCASE: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

static TABLE: LetterTable = LetterTable {
    alphabet: Alphabet::Latin,
    lowercase: &LOWERCASE,
    uppercase: &UPPERCASE,
    variants: &[],
};

fn index() -> &'static HashMap<char, usize> {
    static INDEX: OnceLock<HashMap<char, usize>> = OnceLock::new();
    INDEX.get_or_init(|| TABLE.build_index())
}

/// Letter at `position` (1..=26).
pub fn to_latin_letter<P: Ordinal>(position: P, uppercase: bool) -> Result<char, AlphabetError> {
    TABLE.letter(position, uppercase)
}

/// Position of a single ASCII letter, either case.
pub fn from_latin_letter(symbol: &str) -> Result<usize, AlphabetError> {
    TABLE.position(index(), symbol)
}

//! Greek alphabet, `α`..`ω`.
//!
//! 24 positions. Final sigma `ς` is accepted on input as sigma (18) but never
//! produced. Precomposed letters carrying accents, breathings or diaeresis
//! (`ά`, `Ἅ`, `ϊ`, `ΰ`) are not letters of the table and are rejected.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::alphabet::Alphabet;
use crate::error::AlphabetError;
use crate::letters::LetterTable;
use crate::ordinal::Ordinal;

pub const LOWERCASE: [char; 24] = [
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ', 'σ', 'τ',
    'υ', 'φ', 'χ', 'ψ', 'ω',
];

pub const UPPERCASE: [char; 24] = [
    'Α', 'Β', 'Γ', 'Δ', 'Ε', 'Ζ', 'Η', 'Θ', 'Ι', 'Κ', 'Λ', 'Μ', 'Ν', 'Ξ', 'Ο', 'Π', 'Ρ', 'Σ', 'Τ',
    'Υ', 'Φ', 'Χ', 'Ψ', 'Ω',
];

const SIGMA: usize = 18;

static TABLE: LetterTable = LetterTable {
    alphabet: Alphabet::Greek,
    lowercase: &LOWERCASE,
    uppercase: &UPPERCASE,
    variants: &[('ς', SIGMA)],
};

fn index() -> &'static HashMap<char, usize> {
    static INDEX: OnceLock<HashMap<char, usize>> = OnceLock::new();
    INDEX.get_or_init(|| TABLE.build_index())
}

/// Letter at `position` (1..=24).
pub fn to_greek_letter<P: Ordinal>(position: P, uppercase: bool) -> Result<char, AlphabetError> {
    TABLE.letter(position, uppercase)
}

pub fn from_greek_letter(symbol: &str) -> Result<usize, AlphabetError> {
    TABLE.position(index(), symbol)
}

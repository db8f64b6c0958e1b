//! Russian Cyrillic alphabet, `а`..`я` with `ё` as its own position (7).
//!
//! Letters that only belong to other Cyrillic orthographies (`ґ`, `і`, `ђ`,
//! `ў`, ...) are outside the table.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::alphabet::Alphabet;
use crate::error::AlphabetError;
use crate::letters::LetterTable;
use crate::ordinal::Ordinal;

pub const LOWERCASE: [char; 33] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р', 'с',
    'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];

pub const UPPERCASE: [char; 33] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

static TABLE: LetterTable = LetterTable {
    alphabet: Alphabet::Cyrillic,
    lowercase: &LOWERCASE,
    uppercase: &UPPERCASE,
    variants: &[],
};

fn index() -> &'static HashMap<char, usize> {
    static INDEX: OnceLock<HashMap<char, usize>> = OnceLock::new();
    INDEX.get_or_init(|| TABLE.build_index())
}

/// Letter at `position` (1..=33).
pub fn to_cyrillic_letter<P: Ordinal>(position: P, uppercase: bool) -> Result<char, AlphabetError> {
    TABLE.letter(position, uppercase)
}

pub fn from_cyrillic_letter(symbol: &str) -> Result<usize, AlphabetError> {
    TABLE.position(index(), symbol)
}

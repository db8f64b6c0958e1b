//! Conversion between 1-based positions and alphabet symbols.
//!
//! Four self-contained tables (Latin, Greek, Russian Cyrillic and the NATO
//! phonetic alphabet), each with a forward `to_*` and a reverse `from_*`
//! function. Forward conversions fail with [`AlphabetError::Range`], reverse
//! conversions with [`AlphabetError::Validation`].

pub mod alphabet;
pub mod cyrillic;
pub mod error;
pub mod greek;
mod letters;
pub mod latin;
pub mod nato;
pub mod ordinal;

#[cfg(test)]
mod tests;

pub use alphabet::Alphabet;
pub use cyrillic::{from_cyrillic_letter, to_cyrillic_letter};
pub use error::AlphabetError;
pub use greek::{from_greek_letter, to_greek_letter};
pub use latin::{from_latin_letter, to_latin_letter};
pub use nato::{from_nato_phonetic, to_nato_phonetic};
pub use ordinal::Ordinal;

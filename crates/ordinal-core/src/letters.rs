//! Shared machinery for the single-letter alphabets.
//!
//! The reverse index is keyed by exact `char`: every canonical lowercase and
//! uppercase letter plus the table's variant glyphs. No Unicode case mapping
//! happens at lookup time, so compatibility characters whose lowercase is a
//! canonical letter (the Kelvin sign, for one) are rejected.

use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::alphabet::Alphabet;
use crate::error::AlphabetError;
use crate::ordinal::Ordinal;

pub(crate) struct LetterTable {
    pub alphabet: Alphabet,
    pub lowercase: &'static [char],
    pub uppercase: &'static [char],
    /// Extra glyphs accepted on input, with their 1-based position.
    pub variants: &'static [(char, usize)],
}

impl LetterTable {
    pub fn letter<P: Ordinal>(&self, position: P, uppercase: bool) -> Result<char, AlphabetError> {
        let index = position
            .checked_index(self.lowercase.len())
            .ok_or_else(|| AlphabetError::range(self.alphabet, position.describe()))?;
        Ok(if uppercase {
            self.uppercase[index]
        } else {
            self.lowercase[index]
        })
    }

    pub fn position(
        &self,
        index: &HashMap<char, usize>,
        symbol: &str,
    ) -> Result<usize, AlphabetError> {
        let found = single_char(symbol).and_then(|c| index.get(&c).copied());
        match found {
            Some(position) => Ok(position),
            None => {
                debug!(alphabet = %self.alphabet, symbol, "rejected symbol");
                Err(AlphabetError::validation(self.alphabet, symbol))
            }
        }
    }

    pub fn build_index(&self) -> HashMap<char, usize> {
        let _span = debug_span!("build_letter_index", alphabet = %self.alphabet).entered();
        let mut index = HashMap::with_capacity(self.lowercase.len() * 2 + self.variants.len());
        for (i, (&lower, &upper)) in self.lowercase.iter().zip(self.uppercase).enumerate() {
            index.insert(lower, i + 1);
            index.insert(upper, i + 1);
        }
        for &(variant, position) in self.variants {
            index.insert(variant, position);
        }
        debug!(entries = index.len());
        index
    }
}

/// The only `char` of `s`, or `None` for empty and multi-character input.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

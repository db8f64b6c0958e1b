//! The four supported alphabets and uniform dispatch over them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlphabetError;
use crate::ordinal::Ordinal;
use crate::{cyrillic, greek, latin, nato};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    Latin,
    Greek,
    Cyrillic,
    Nato,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown alphabet: {0} (expected latin, greek, cyrillic or nato)")]
pub struct UnknownAlphabet(pub String);

impl Alphabet {
    pub const ALL: [Alphabet; 4] = [
        Alphabet::Latin,
        Alphabet::Greek,
        Alphabet::Cyrillic,
        Alphabet::Nato,
    ];

    /// Number of positions in the canonical sequence.
    pub fn size(self) -> usize {
        match self {
            Alphabet::Latin => latin::LOWERCASE.len(),
            Alphabet::Greek => greek::LOWERCASE.len(),
            Alphabet::Cyrillic => cyrillic::LOWERCASE.len(),
            Alphabet::Nato => nato::WORDS.len(),
        }
    }

    /// Short lowercase identifier, as accepted by `FromStr`.
    pub fn id(self) -> &'static str {
        match self {
            Alphabet::Latin => "latin",
            Alphabet::Greek => "greek",
            Alphabet::Cyrillic => "cyrillic",
            Alphabet::Nato => "nato",
        }
    }

    /// Canonical symbol for `position`. The NATO table ignores `uppercase`.
    pub fn symbol<P: Ordinal>(self, position: P, uppercase: bool) -> Result<String, AlphabetError> {
        match self {
            Alphabet::Latin => latin::to_latin_letter(position, uppercase).map(String::from),
            Alphabet::Greek => greek::to_greek_letter(position, uppercase).map(String::from),
            Alphabet::Cyrillic => {
                cyrillic::to_cyrillic_letter(position, uppercase).map(String::from)
            }
            Alphabet::Nato => nato::to_nato_phonetic(position).map(String::from),
        }
    }

    /// 1-based position of `symbol`, accepting either case and known aliases.
    pub fn position(self, symbol: &str) -> Result<usize, AlphabetError> {
        match self {
            Alphabet::Latin => latin::from_latin_letter(symbol),
            Alphabet::Greek => greek::from_greek_letter(symbol),
            Alphabet::Cyrillic => cyrillic::from_cyrillic_letter(symbol),
            Alphabet::Nato => nato::from_nato_phonetic(symbol),
        }
    }

    /// The whole canonical sequence in position order.
    pub fn symbols(self, uppercase: bool) -> Vec<String> {
        match self {
            Alphabet::Latin => letters_of(&latin::LOWERCASE, &latin::UPPERCASE, uppercase),
            Alphabet::Greek => letters_of(&greek::LOWERCASE, &greek::UPPERCASE, uppercase),
            Alphabet::Cyrillic => {
                letters_of(&cyrillic::LOWERCASE, &cyrillic::UPPERCASE, uppercase)
            }
            Alphabet::Nato => nato::WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

fn letters_of(lower: &[char], upper: &[char], uppercase: bool) -> Vec<String> {
    let source = if uppercase { upper } else { lower };
    source.iter().map(|c| c.to_string()).collect()
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alphabet::Latin => "Latin",
            Alphabet::Greek => "Greek",
            Alphabet::Cyrillic => "Cyrillic",
            Alphabet::Nato => "NATO phonetic",
        })
    }
}

impl FromStr for Alphabet {
    type Err = UnknownAlphabet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlphabet(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(Alphabet::Latin.size(), 26);
        assert_eq!(Alphabet::Greek.size(), 24);
        assert_eq!(Alphabet::Cyrillic.size(), 33);
        assert_eq!(Alphabet::Nato.size(), 26);
    }

    #[test]
    fn parse_ids() {
        for alphabet in Alphabet::ALL {
            assert_eq!(alphabet.id().parse::<Alphabet>().unwrap(), alphabet);
        }
        assert_eq!("GREEK".parse::<Alphabet>().unwrap(), Alphabet::Greek);
        assert!("klingon".parse::<Alphabet>().is_err());
        assert!("".parse::<Alphabet>().is_err());
    }

    #[test]
    fn dispatch() {
        assert_eq!(Alphabet::Latin.symbol(3, true).unwrap(), "C");
        assert_eq!(Alphabet::Greek.symbol(24, false).unwrap(), "ω");
        assert_eq!(Alphabet::Cyrillic.symbol(7, true).unwrap(), "Ё");
        assert_eq!(Alphabet::Nato.symbol(24, true).unwrap(), "X-ray");
        assert_eq!(Alphabet::Nato.position("juliet").unwrap(), 10);
        assert_eq!(Alphabet::Greek.position("ς").unwrap(), 18);
    }

    #[test]
    fn symbols_cover_every_position() {
        for alphabet in Alphabet::ALL {
            for uppercase in [false, true] {
                let symbols = alphabet.symbols(uppercase);
                assert_eq!(symbols.len(), alphabet.size());
                for (i, symbol) in symbols.iter().enumerate() {
                    assert_eq!(alphabet.symbol(i + 1, uppercase).unwrap(), *symbol);
                    assert_eq!(alphabet.position(symbol).unwrap(), i + 1);
                }
            }
        }
    }

    #[test]
    fn deserialize_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            alphabet: Alphabet,
        }
        let w: Wrapper = toml::from_str("alphabet = \"cyrillic\"").unwrap();
        assert_eq!(w.alphabet, Alphabet::Cyrillic);
        assert!(toml::from_str::<Wrapper>("alphabet = \"Cyrillic\"").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Alphabet::Nato.to_string(), "NATO phonetic");
        assert_eq!(Alphabet::Cyrillic.to_string(), "Cyrillic");
    }
}

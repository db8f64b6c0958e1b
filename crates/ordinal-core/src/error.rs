use crate::alphabet::Alphabet;

/// Failure of a single conversion.
///
/// Forward conversions only ever return `Range`, reverse conversions only
/// ever return `Validation`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("{alphabet} position must be an integer in 1..={len}, got {position}")]
    Range {
        alphabet: Alphabet,
        position: String,
        len: usize,
    },
    #[error("not a {alphabet} symbol: {symbol:?}")]
    Validation { alphabet: Alphabet, symbol: String },
}

impl AlphabetError {
    pub(crate) fn range(alphabet: Alphabet, position: String) -> Self {
        AlphabetError::Range {
            alphabet,
            position,
            len: alphabet.size(),
        }
    }

    pub(crate) fn validation(alphabet: Alphabet, symbol: &str) -> Self {
        AlphabetError::Validation {
            alphabet,
            symbol: symbol.to_string(),
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        match self {
            AlphabetError::Range { alphabet, .. } | AlphabetError::Validation { alphabet, .. } => {
                *alphabet
            }
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, AlphabetError::Range { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AlphabetError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_message() {
        let err = AlphabetError::range(Alphabet::Latin, "27".to_string());
        assert_eq!(
            err.to_string(),
            "Latin position must be an integer in 1..=26, got 27"
        );
        assert!(err.is_range());
        assert!(!err.is_validation());
        assert_eq!(err.alphabet(), Alphabet::Latin);
    }

    #[test]
    fn validation_message() {
        let err = AlphabetError::validation(Alphabet::Greek, "a");
        assert_eq!(err.to_string(), "not a Greek symbol: \"a\"");
        assert!(err.is_validation());
        assert_eq!(err.alphabet(), Alphabet::Greek);
    }

    #[test]
    fn range_len_follows_alphabet() {
        match AlphabetError::range(Alphabet::Cyrillic, "0".to_string()) {
            AlphabetError::Range { len, .. } => assert_eq!(len, 33),
            other => panic!("expected Range, got {other:?}"),
        }
    }
}

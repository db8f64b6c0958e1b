//! Property-based tests for the conversion tables.
//!
//! Every alphabet must round-trip each position in both cases, reject every
//! out-of-range position with a range error, and reject the symbols of the
//! other alphabets with a validation error.

use proptest::prelude::*;

use crate::Alphabet;

fn arb_alphabet() -> impl Strategy<Value = Alphabet> {
    prop::sample::select(Alphabet::ALL.to_vec())
}

/// An alphabet together with a valid position in it.
fn arb_alphabet_position() -> impl Strategy<Value = (Alphabet, usize)> {
    arb_alphabet().prop_flat_map(|a| (Just(a), 1..=a.size()))
}

proptest! {
    #[test]
    fn round_trip((alphabet, position) in arb_alphabet_position(), uppercase in any::<bool>()) {
        let symbol = alphabet.symbol(position, uppercase).unwrap();
        let back = alphabet.position(&symbol).unwrap();
        prop_assert_eq!(back, position);
        prop_assert_eq!(alphabet.symbol(back, uppercase).unwrap(), symbol);
    }

    #[test]
    fn case_does_not_change_identity((alphabet, position) in arb_alphabet_position()) {
        let lower = alphabet.symbol(position, false).unwrap();
        let upper = alphabet.symbol(position, true).unwrap();
        prop_assert_eq!(alphabet.position(&lower).unwrap(), position);
        prop_assert_eq!(alphabet.position(&upper).unwrap(), position);
    }

    #[test]
    fn out_of_range_integers(alphabet in arb_alphabet(), position in any::<i64>()) {
        let valid = (1..=alphabet.size() as i64).contains(&position);
        let result = alphabet.symbol(position, false);
        if valid {
            prop_assert!(result.is_ok());
        } else {
            let err = result.unwrap_err();
            prop_assert!(err.is_range());
            prop_assert_eq!(err.alphabet(), alphabet);
        }
    }

    #[test]
    fn fractional_positions(alphabet in arb_alphabet(), whole in 0u32..40, frac in 0.01f64..0.99) {
        let err = alphabet.symbol(whole as f64 + frac, false).unwrap_err();
        prop_assert!(err.is_range());
    }

    #[test]
    fn symbols_stay_in_their_alphabet(
        (source, position) in arb_alphabet_position(),
        target in arb_alphabet(),
        uppercase in any::<bool>(),
    ) {
        prop_assume!(source != target);
        // Latin letters and NATO words never overlap as strings, so any
        // symbol from one table is foreign to every other table.
        let symbol = source.symbol(position, uppercase).unwrap();
        let err = target.position(&symbol).unwrap_err();
        prop_assert!(err.is_validation());
        prop_assert_eq!(err.alphabet(), target);
    }

    #[test]
    fn arbitrary_strings_never_panic(alphabet in arb_alphabet(), s in "\\PC{0,4}") {
        if let Ok(position) = alphabet.position(&s) {
            prop_assert!((1..=alphabet.size()).contains(&position));
        }
    }
}

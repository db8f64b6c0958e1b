//! NATO phonetic alphabet, `Alfa`..`Zulu`.
//!
//! Output uses the official ICAO spellings. Input is matched ASCII
//! case-insensitively against those words and the alias table, which is
//! loaded from TOML (see [`config`]) the first time a word is looked up.

mod config;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::alphabet::Alphabet;
use crate::error::AlphabetError;
use crate::ordinal::Ordinal;

pub use config::{parse_nato_aliases_toml, AliasConfigError, DEFAULT_NATO_ALIASES_TOML};

pub const WORDS: [&str; 26] = [
    "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

static INDEX: OnceLock<HashMap<String, usize>> = OnceLock::new();

/// Replace the default aliases with `toml_content`.
///
/// The lookup table is built and installed in one step, so this fails with
/// `AlreadyInitialized` whenever any lookup (on any thread) or an earlier
/// `init_custom` got there first.
pub fn init_custom(toml_content: String) -> Result<(), AliasConfigError> {
    let aliases = parse_nato_aliases_toml(&toml_content)?;
    INDEX
        .set(build_index(aliases, true))
        .map_err(|_| AliasConfigError::AlreadyInitialized)
}

/// Returns the embedded default alias TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_NATO_ALIASES_TOML
}

/// Position of an official code word, ignoring ASCII case. Aliases excluded.
pub(crate) fn canonical_position(word: &str) -> Option<usize> {
    WORDS
        .iter()
        .position(|w| w.eq_ignore_ascii_case(word))
        .map(|i| i + 1)
}

fn build_index(aliases: BTreeMap<String, usize>, custom: bool) -> HashMap<String, usize> {
    let _span = debug_span!("build_nato_index", custom).entered();
    let mut index: HashMap<String, usize> = WORDS
        .iter()
        .enumerate()
        .map(|(i, w)| (w.to_ascii_lowercase(), i + 1))
        .collect();
    index.extend(aliases);
    debug!(entries = index.len());
    index
}

fn index() -> &'static HashMap<String, usize> {
    INDEX.get_or_init(|| {
        let aliases = parse_nato_aliases_toml(DEFAULT_NATO_ALIASES_TOML)
            .expect("NATO alias TOML must be valid");
        build_index(aliases, false)
    })
}

/// Code word for `position` (1..=26), e.g. `"X-ray"` for 24.
pub fn to_nato_phonetic<P: Ordinal>(position: P) -> Result<&'static str, AlphabetError> {
    position
        .checked_index(WORDS.len())
        .map(|i| WORDS[i])
        .ok_or_else(|| AlphabetError::range(Alphabet::Nato, position.describe()))
}

/// Position of a code word or alias, ignoring ASCII case.
pub fn from_nato_phonetic(word: &str) -> Result<usize, AlphabetError> {
    match index().get(&word.to_ascii_lowercase()) {
        Some(&position) => Ok(position),
        None => {
            debug!(word, "rejected code word");
            Err(AlphabetError::validation(Alphabet::Nato, word))
        }
    }
}

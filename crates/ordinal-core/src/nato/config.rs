use std::collections::BTreeMap;

use serde::Deserialize;

use super::canonical_position;

pub const DEFAULT_NATO_ALIASES_TOML: &str = include_str!("default_nato_aliases.toml");

#[derive(Deserialize)]
struct AliasConfig {
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AliasConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("empty alias key")]
    EmptyKey,
    #[error("non-ASCII alias: {0}")]
    NonAsciiKey(String),
    #[error("alias {alias:?} points to {target:?}, which is not a code word")]
    UnknownTarget { alias: String, target: String },
    #[error("alias {0:?} is already a code word")]
    ShadowsCanonical(String),
    #[error("alias {0:?} is listed twice with different targets")]
    Conflict(String),
    #[error("NATO alias table already initialized")]
    AlreadyInitialized,
}

/// Parse alias TOML into a sorted `BTreeMap<lowercase alias, position>`.
///
/// An empty or missing `[aliases]` table is valid and yields no aliases.
pub fn parse_nato_aliases_toml(toml_str: &str) -> Result<BTreeMap<String, usize>, AliasConfigError> {
    let config: AliasConfig =
        toml::from_str(toml_str).map_err(|e| AliasConfigError::Parse(e.to_string()))?;

    let mut aliases = BTreeMap::new();
    for (alias, target) in &config.aliases {
        if alias.is_empty() {
            return Err(AliasConfigError::EmptyKey);
        }
        if !alias.is_ascii() {
            return Err(AliasConfigError::NonAsciiKey(alias.clone()));
        }
        if canonical_position(alias).is_some() {
            return Err(AliasConfigError::ShadowsCanonical(alias.clone()));
        }
        let position =
            canonical_position(target).ok_or_else(|| AliasConfigError::UnknownTarget {
                alias: alias.clone(),
                target: target.clone(),
            })?;
        let key = alias.to_ascii_lowercase();
        match aliases.insert(key, position) {
            Some(previous) if previous != position => {
                return Err(AliasConfigError::Conflict(alias.clone()));
            }
            _ => {}
        }
    }

    Ok(aliases)
}

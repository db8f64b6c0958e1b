use std::collections::BTreeMap;
use std::fs;
use std::io;

use ordinal_core::nato::{self, AliasConfigError};

#[derive(Debug, thiserror::Error)]
pub enum AliasFileError {
    #[error("Error reading {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("Error: {0}")]
    Config(#[from] AliasConfigError),
}

/// Read and validate an alias TOML file, returning its raw text and the
/// parsed alias map.
pub fn read_alias_file(file: &str) -> Result<(String, BTreeMap<String, usize>), AliasFileError> {
    let content = fs::read_to_string(file).map_err(|source| AliasFileError::Read {
        path: file.to_string(),
        source,
    })?;
    let map = nato::parse_nato_aliases_toml(&content)?;
    Ok((content, map))
}

pub fn aliases_export() {
    print!("{}", nato::default_toml());
}

pub fn aliases_validate(file: &str) {
    let (_, map) = die!(read_alias_file(file), "{}");
    println!("OK: {} aliases", map.len());
}

/// Install custom NATO aliases from `file`. Must run before any lookup.
pub fn install_aliases(file: &str) {
    let (content, _) = die!(read_alias_file(file), "{}");
    die!(nato::init_custom(content), "Error loading aliases: {}");
}

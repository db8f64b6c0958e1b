use serde::Serialize;

use ordinal_core::{Alphabet, AlphabetError};

#[derive(Debug, Serialize)]
pub struct Conversion {
    pub alphabet: Alphabet,
    pub position: usize,
    pub symbol: String,
}

impl Conversion {
    fn render(&self, json: bool) -> String {
        if json {
            serde_json::to_string(self).expect("JSON serialization failed")
        } else {
            format!("{}\t{}", self.position, self.symbol)
        }
    }
}

/// Forward conversion. `position` arrives as parsed text, so fractional and
/// negative values reach the library and fail there.
pub fn to_symbol(
    alphabet: Alphabet,
    position: f64,
    uppercase: bool,
) -> Result<Conversion, AlphabetError> {
    let symbol = alphabet.symbol(position, uppercase)?;
    Ok(Conversion {
        alphabet,
        // validated as an integer in range above
        position: position as usize,
        symbol,
    })
}

pub fn from_symbol(alphabet: Alphabet, symbol: &str) -> Result<Conversion, AlphabetError> {
    let position = alphabet.position(symbol)?;
    Ok(Conversion {
        alphabet,
        position,
        symbol: symbol.to_string(),
    })
}

pub fn table(alphabet: Alphabet, uppercase: bool) -> Vec<Conversion> {
    alphabet
        .symbols(uppercase)
        .into_iter()
        .enumerate()
        .map(|(i, symbol)| Conversion {
            alphabet,
            position: i + 1,
            symbol,
        })
        .collect()
}

pub fn to_cmd(alphabet: Alphabet, position: f64, uppercase: bool, json: bool) {
    let conversion = die!(to_symbol(alphabet, position, uppercase), "Error: {}");
    if json {
        println!("{}", conversion.render(true));
    } else {
        println!("{}", conversion.symbol);
    }
}

pub fn from_cmd(alphabet: Alphabet, symbol: &str, json: bool) {
    let conversion = die!(from_symbol(alphabet, symbol), "Error: {}");
    if json {
        println!("{}", conversion.render(true));
    } else {
        println!("{}", conversion.position);
    }
}

pub fn table_cmd(alphabet: Alphabet, uppercase: bool, json: bool) {
    let rows = table(alphabet, uppercase);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).expect("JSON serialization failed")
        );
    } else {
        for row in &rows {
            println!("{}", row.render(false));
        }
    }
}

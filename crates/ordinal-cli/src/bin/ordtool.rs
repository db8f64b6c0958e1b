use clap::{Parser, Subcommand};

use ordinal_cli::commands::{config_ops, convert_ops};
use ordinal_cli::trace_init::init_tracing;
use ordinal_core::Alphabet;

#[derive(Parser)]
#[command(name = "ordtool", about = "Alphabet position conversion")]
struct Cli {
    /// Custom NATO alias TOML file (replaces the built-in aliases)
    #[arg(long, global = true)]
    aliases: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the symbol at a 1-based position
    #[command(name = "to")]
    ToSymbol {
        /// latin, greek, cyrillic or nato
        #[arg(value_parser = clap::value_parser!(Alphabet))]
        alphabet: Alphabet,
        /// 1-based position
        #[arg(allow_negative_numbers = true)]
        position: f64,
        /// Uppercase letter (ignored for nato)
        #[arg(short, long)]
        upper: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the 1-based position of a symbol
    #[command(name = "from")]
    FromSymbol {
        /// latin, greek, cyrillic or nato
        #[arg(value_parser = clap::value_parser!(Alphabet))]
        alphabet: Alphabet,
        /// Letter or code word
        symbol: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every position and symbol of an alphabet
    Table {
        /// latin, greek, cyrillic or nato
        #[arg(value_parser = clap::value_parser!(Alphabet))]
        alphabet: Alphabet,
        /// Uppercase letters (ignored for nato)
        #[arg(short, long)]
        upper: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage NATO alias configuration
    Aliases {
        #[command(subcommand)]
        action: AliasesAction,
    },
}

#[derive(Subcommand)]
enum AliasesAction {
    /// Export default NATO aliases as TOML
    Export,
    /// Validate a custom NATO alias TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Some(file) = cli.aliases.as_deref() {
        config_ops::install_aliases(file);
    }

    match cli.command {
        Command::ToSymbol {
            alphabet,
            position,
            upper,
            json,
        } => convert_ops::to_cmd(alphabet, position, upper, json),
        Command::FromSymbol {
            alphabet,
            symbol,
            json,
        } => convert_ops::from_cmd(alphabet, &symbol, json),
        Command::Table {
            alphabet,
            upper,
            json,
        } => convert_ops::table_cmd(alphabet, upper, json),
        Command::Aliases { action } => match action {
            AliasesAction::Export => config_ops::aliases_export(),
            AliasesAction::Validate { file } => config_ops::aliases_validate(&file),
        },
    }
}

use clap::{Parser, Subcommand, ValueEnum};
use ibge_core::loader::{CITIES_FILE, TOM_FILE};
use std::path::PathBuf;

/// CLI arguments for ibge-cli
#[derive(Debug, Parser)]
#[command(
    name = "ibge",
    version,
    about = "CLI for querying Brazilian states and municipalities by IBGE code"
)]
pub struct CliArgs {
    /// Directory holding the IBGE fixture files (default: the bundled sample)
    #[arg(short = 'd', long = "data-dir", env = "IBGE_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Municipality list inside the data directory (may end in .gz)
    #[arg(long, env = "IBGE_CITIES_FILE", default_value = CITIES_FILE, global = true)]
    pub cities_file: String,

    /// IBGE -> TOM cross-reference table inside the data directory
    #[arg(long, env = "IBGE_TOM_FILE", default_value = TOM_FILE, global = true)]
    pub tom_file: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Show a summary of the index contents
    Stats,

    /// List all states
    States,

    /// Lookup a state by abbreviation or IBGE code
    State {
        /// Abbreviation (e.g. SP, rj) or IBGE code (e.g. 35)
        uf: String,
    },

    /// List all cities of a state
    Cities {
        /// Abbreviation (e.g. SP, rj) or IBGE code (e.g. 35)
        uf: String,
    },

    /// Lookup a city by IBGE code
    City {
        /// IBGE municipality code (e.g. 3550308)
        code: String,
    },

    /// Lookup a city by its legacy TOM code
    CityTom {
        /// TOM code (e.g. 7107)
        code: String,
    },
}

// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// AnkiConnect URL (overrides the config file)
    #[arg(long, value_name = "URL", global = true)]
    pub url: Option<String>,

    /// Path to config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (export, import, or list)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Export a deck as TOML, JSON or YAML (prints to stdout)
    Export {
        /// Name of the deck to export
        #[arg(value_name = "DECK")]
        deck: String,

        /// Output format: toml, json or yaml [default: toml, or from --output extension]
        #[arg(short = 'F', long, value_name = "FORMAT")]
        format: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Import a deck from an exported file
    Import {
        /// Exported deck file (.toml, .json, .yaml or .yml)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Replace the deck, including its cards, if it already exists
        #[arg(short, long)]
        force: bool,

        /// Input format, overriding the file extension
        #[arg(short = 'F', long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// List available decks
    List,
}

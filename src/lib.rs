// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use application::{DeckExporter, DeckImporter, DeckLister};
use infrastructure::{AnkiConnectClient, Config};
use ports::Format;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::cli::args::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting ankideck with arguments");

    // Initialize infrastructure
    let config = Config::resolve(args.config.as_deref())?.with_url(args.url);
    let client = AnkiConnectClient::new(config.anki_connect)?;
    debug!(url = client.url(), "Using AnkiConnect");

    match args.command {
        Command::Export {
            deck,
            format,
            output,
        } => {
            let format = export_format(format.as_deref(), output.as_deref())?;
            let export = DeckExporter::new(client)
                .export_deck(&deck)
                .with_context(|| format!("Failed to export deck '{deck}'"))?;

            match output {
                Some(path) => {
                    write_atomically(&path, |file| format.encode(&export, file))?;
                    info!(?path, %format, "Wrote export");
                    eprintln!("Exported deck '{}' to {}", deck, path.display());
                }
                None => format.encode(&export, &mut io::stdout().lock())?,
            }
        }
        Command::Import {
            file,
            force,
            format,
        } => {
            let format = match format {
                Some(token) => token.parse::<Format>()?,
                None => Format::from_path(&file)?,
            };
            let reader = File::open(&file)
                .with_context(|| format!("Failed to open {}", file.display()))?;
            let export = format
                .decode(&mut BufReader::new(reader))
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let summary = DeckImporter::new(client)
                .import_deck(&export, force)
                .with_context(|| format!("Failed to import deck '{}'", export.deck_name))?;
            println!(
                "Imported {} of {} notes into deck '{}'",
                summary.imported, summary.total, export.deck_name
            );
        }
        Command::List => {
            let decks = DeckLister::new(client).list_decks()?;
            if decks.is_empty() {
                println!("No decks found.");
            }
            for deck in decks {
                println!("{deck}");
            }
        }
    }

    Ok(())
}

/// `--format` wins; otherwise the output file's extension, otherwise TOML
pub fn export_format(token: Option<&str>, output: Option<&Path>) -> Result<Format> {
    let format = match (token, output) {
        (Some(token), _) => token.parse()?,
        (None, Some(path)) => Format::from_path(path)?,
        (None, None) => Format::Toml,
    };
    Ok(format)
}

/// Render into a temporary file next to `path` and move it into place only on success
fn write_atomically<F>(path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> std::result::Result<(), domain::DomainError>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    render(file.as_file_mut())?;
    file.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

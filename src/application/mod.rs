// src/application/mod.rs
pub mod deck_exporter;
pub mod deck_importer;
pub mod deck_lister;
pub mod deck_repository;

pub use deck_exporter::DeckExporter;
pub use deck_importer::{DeckImporter, ImportSummary};
pub use deck_lister::DeckLister;
pub use deck_repository::DeckRepository;

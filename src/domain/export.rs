// src/domain/export.rs
use crate::constants::SCHEMA_VERSION;
use crate::domain::Note;
use serde::{Deserialize, Serialize};

/// Root of every exported document.
///
/// `models` holds the note type definitions exactly as AnkiConnect returned them.
/// They are carried along for reference and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Export {
    pub version: u32,
    pub deck_name: String,
    pub notes: Vec<Note>,
    pub models: Vec<serde_json::Value>,
}

impl Export {
    pub fn new(version: u32, deck_name: impl Into<String>, notes: Vec<Note>) -> Self {
        Self {
            version,
            deck_name: deck_name.into(),
            notes,
            models: Vec::new(),
        }
    }

    /// Export at the current schema version
    pub fn for_deck(deck_name: impl Into<String>, notes: Vec<Note>) -> Self {
        Self::new(SCHEMA_VERSION, deck_name, notes)
    }

    pub fn with_models(mut self, models: Vec<serde_json::Value>) -> Self {
        self.models = models;
        self
    }
}

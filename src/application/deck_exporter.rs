// src/application/deck_exporter.rs
use crate::application::DeckRepository;
use crate::domain::{DomainError, Export};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Builds an [`Export`] from a deck in Anki
pub struct DeckExporter<R: DeckRepository> {
    repository: R,
}

impl<R: DeckRepository> DeckExporter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fetch all notes of `deck` together with the note types they use.
    ///
    /// The result is not normalized; codecs do that when writing.
    pub fn export_deck(&mut self, deck: &str) -> Result<Export, DomainError> {
        let decks = self.repository.deck_names()?;
        if !decks.iter().any(|d| d == deck) {
            return Err(DomainError::Precondition(format!(
                "Deck '{deck}' does not exist. Use `ankideck list` to see available decks."
            )));
        }

        let ids = self.repository.find_note_ids(deck)?;
        debug!(deck, count = ids.len(), "Found notes");
        let notes = if ids.is_empty() {
            Vec::new()
        } else {
            self.repository.notes_info(&ids)?
        };

        let model_names: Vec<String> = notes
            .iter()
            .map(|n| n.model_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let models = if model_names.is_empty() {
            Vec::new()
        } else {
            self.repository.find_models(&model_names)?
        };

        info!(deck, notes = notes.len(), models = models.len(), "Exported deck");
        Ok(Export::for_deck(deck, notes).with_models(models))
    }
}

// src/application/deck_repository.rs
use crate::domain::{DomainError, Note};

/// Remote side of every use case: the decks, notes and note types living in Anki.
///
/// Implementations only translate between the canonical model and whatever
/// the backend speaks; ordering and validation happen in the use cases.
pub trait DeckRepository {
    fn deck_names(&mut self) -> Result<Vec<String>, DomainError>;

    /// Ids of all notes with at least one card in `deck`
    fn find_note_ids(&mut self, deck: &str) -> Result<Vec<u64>, DomainError>;

    fn notes_info(&mut self, ids: &[u64]) -> Result<Vec<Note>, DomainError>;

    /// Note type definitions, returned as opaque values
    fn find_models(&mut self, names: &[String]) -> Result<Vec<serde_json::Value>, DomainError>;

    fn create_deck(&mut self, name: &str) -> Result<(), DomainError>;

    /// Delete a deck together with its cards
    fn delete_deck(&mut self, name: &str) -> Result<(), DomainError>;

    /// Create `notes` in `deck`.
    /// Returns one entry per note: the new id, or `None` if Anki rejected it.
    fn add_notes(&mut self, deck: &str, notes: &[Note]) -> Result<Vec<Option<u64>>, DomainError>;
}

impl<R: DeckRepository + ?Sized> DeckRepository for &mut R {
    fn deck_names(&mut self) -> Result<Vec<String>, DomainError> {
        (**self).deck_names()
    }

    fn find_note_ids(&mut self, deck: &str) -> Result<Vec<u64>, DomainError> {
        (**self).find_note_ids(deck)
    }

    fn notes_info(&mut self, ids: &[u64]) -> Result<Vec<Note>, DomainError> {
        (**self).notes_info(ids)
    }

    fn find_models(&mut self, names: &[String]) -> Result<Vec<serde_json::Value>, DomainError> {
        (**self).find_models(names)
    }

    fn create_deck(&mut self, name: &str) -> Result<(), DomainError> {
        (**self).create_deck(name)
    }

    fn delete_deck(&mut self, name: &str) -> Result<(), DomainError> {
        (**self).delete_deck(name)
    }

    fn add_notes(&mut self, deck: &str, notes: &[Note]) -> Result<Vec<Option<u64>>, DomainError> {
        (**self).add_notes(deck, notes)
    }
}

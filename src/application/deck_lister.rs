// src/application/deck_lister.rs
use crate::application::DeckRepository;
use crate::domain::DomainError;

pub struct DeckLister<R: DeckRepository> {
    repository: R,
}

impl<R: DeckRepository> DeckLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// All deck names, sorted
    pub fn list_decks(&mut self) -> Result<Vec<String>, DomainError> {
        let mut names = self.repository.deck_names()?;
        names.sort();
        Ok(names)
    }
}

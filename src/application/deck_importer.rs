// src/application/deck_importer.rs
use crate::application::DeckRepository;
use crate::domain::{DomainError, Export};
use tracing::{debug, info, warn};

/// Outcome of an import: how many of the exported notes Anki accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub total: usize,
}

/// Recreates an exported deck in Anki
pub struct DeckImporter<R: DeckRepository> {
    repository: R,
}

impl<R: DeckRepository> DeckImporter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create the deck and all its notes.
    ///
    /// An existing deck of the same name is an error unless `force` is set,
    /// in which case it is deleted, cards included, before the import.
    /// Notes are always created fresh; their ids and field order are not sent.
    pub fn import_deck(&mut self, export: &Export, force: bool) -> Result<ImportSummary, DomainError> {
        let deck = export.deck_name.as_str();
        if deck.trim().is_empty() {
            return Err(DomainError::Precondition(
                "Export has no deck name".to_string(),
            ));
        }

        let exists = self.repository.deck_names()?.iter().any(|d| d == deck);
        match (exists, force) {
            (true, false) => {
                return Err(DomainError::Precondition(format!(
                    "Deck '{deck}' already exists. Use --force to overwrite."
                )))
            }
            (true, true) => {
                info!(deck, "Replacing existing deck");
                self.repository.delete_deck(deck)?;
            }
            (false, _) => {}
        }

        self.repository.create_deck(deck)?;
        if !export.models.is_empty() {
            debug!(count = export.models.len(), "Ignoring exported note types");
        }

        let total = export.notes.len();
        if total == 0 {
            return Ok(ImportSummary { imported: 0, total });
        }

        let results = self.repository.add_notes(deck, &export.notes)?;
        let imported = results.iter().filter(|id| id.is_some()).count();
        if imported < total {
            warn!(deck, imported, total, "Anki rejected some notes");
        }
        info!(deck, imported, total, "Imported deck");

        Ok(ImportSummary { imported, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use crate::util::testing::MockDeckRepository;

    fn export_with_notes() -> Export {
        Export::for_deck(
            "Spanish",
            vec![
                Note::new(10, "Basic").with_field("Front", "uno", 0),
                Note::new(11, "Basic").with_field("Front", "dos", 0),
            ],
        )
    }

    #[test]
    fn given_new_deck_when_importing_then_creates_deck_and_notes() {
        // Arrange
        let mock = MockDeckRepository::builder().build();
        let mut importer = DeckImporter::new(mock);

        // Act
        let summary = importer
            .import_deck(&export_with_notes(), false)
            .expect("Import should succeed");

        // Assert
        assert_eq!(summary, ImportSummary { imported: 2, total: 2 });
        assert_eq!(importer.repository.created_decks(), ["Spanish"]);
        assert_eq!(importer.repository.notes_in("Spanish").len(), 2);
    }

    #[test]
    fn given_existing_deck_without_force_when_importing_then_refuses() {
        // Arrange
        let mock = MockDeckRepository::builder().with_deck("Spanish").build();
        let mut importer = DeckImporter::new(mock);

        // Act
        let result = importer.import_deck(&export_with_notes(), false);

        // Assert
        assert!(matches!(result, Err(DomainError::Precondition(msg)) if msg.contains("--force")));
        assert!(importer.repository.created_decks().is_empty());
    }

    #[test]
    fn given_existing_deck_with_force_when_importing_then_replaces_it() {
        // Arrange
        let mock = MockDeckRepository::builder()
            .with_note("Spanish", Note::new(1, "Basic"))
            .build();
        let mut importer = DeckImporter::new(mock);

        // Act
        importer
            .import_deck(&export_with_notes(), true)
            .expect("Import should succeed");

        // Assert
        assert_eq!(importer.repository.deleted_decks(), ["Spanish"]);
        let ids: Vec<u64> = importer
            .repository
            .notes_in("Spanish")
            .iter()
            .map(|n| n.id)
            .collect();
        assert!(!ids.contains(&1));
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn given_rejected_notes_when_importing_then_counts_only_accepted() {
        // Arrange
        let mock = MockDeckRepository::builder().rejecting_model("Basic").build();
        let mut importer = DeckImporter::new(mock);
        let mut export = export_with_notes();
        export.notes.push(Note::new(12, "Cloze").with_field("Text", "{{c1::tres}}", 0));

        // Act
        let summary = importer
            .import_deck(&export, false)
            .expect("Import should succeed");

        // Assert
        assert_eq!(summary, ImportSummary { imported: 1, total: 3 });
    }

    #[test]
    fn given_export_without_notes_when_importing_then_only_creates_deck() {
        // Arrange
        let mock = MockDeckRepository::builder().build();
        let mut importer = DeckImporter::new(mock);

        // Act
        let summary = importer
            .import_deck(&Export::for_deck("Empty", vec![]), false)
            .expect("Import should succeed");

        // Assert
        assert_eq!(summary, ImportSummary { imported: 0, total: 0 });
        assert_eq!(
            importer.repository.calls(),
            vec!["deck_names", "create_deck"]
        );
    }

    #[test]
    fn given_blank_deck_name_when_importing_then_fails_before_contacting_anki() {
        // Arrange
        let mock = MockDeckRepository::builder().build();
        let mut importer = DeckImporter::new(mock);

        // Act
        let result = importer.import_deck(&Export::for_deck("  ", vec![]), false);

        // Assert
        assert!(matches!(result, Err(DomainError::Precondition(_))));
        assert!(importer.repository.calls().is_empty());
    }
}

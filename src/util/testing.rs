// src/util/testing.rs

use anyhow::Result;
use std::collections::{BTreeMap, HashSet};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::DeckRepository;
use crate::domain::{DomainError, Note};

const FIRST_CREATED_NOTE_ID: u64 = 1_700_000_000_000;

/// In-memory stand-in for Anki, shared by the use case tests.
///
/// Behaves like a small collection: decks hold notes, created notes get
/// fresh ids, deleting a deck drops its notes. Every trait call is recorded.
///
/// # Examples
///
/// ```
/// use ankideck::util::testing::MockDeckRepository;
/// use ankideck::domain::Note;
///
/// let mock = MockDeckRepository::builder()
///     .with_deck("Default")
///     .with_note("Spanish", Note::new(1, "Basic").with_field("Front", "hola", 0))
///     .with_model("Basic", serde_json::json!({"name": "Basic"}))
///     .build();
/// assert_eq!(mock.notes_in("Spanish").len(), 1);
/// ```
pub struct MockDeckRepository {
    decks: Vec<String>,
    notes: Vec<(String, Note)>,
    models: BTreeMap<String, serde_json::Value>,
    rejected_models: HashSet<String>,
    unreachable: bool,
    next_id: u64,
    created_decks: Vec<String>,
    deleted_decks: Vec<String>,
    calls: Vec<&'static str>,
}

impl MockDeckRepository {
    pub fn builder() -> MockDeckRepositoryBuilder {
        MockDeckRepositoryBuilder::new()
    }

    pub fn notes_in(&self, deck: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|(d, _)| d == deck)
            .map(|(_, n)| n)
            .collect()
    }

    pub fn created_decks(&self) -> &[String] {
        &self.created_decks
    }

    pub fn deleted_decks(&self) -> &[String] {
        &self.deleted_decks
    }

    /// Names of the trait methods called so far, in call order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.clone()
    }

    fn record(&mut self, call: &'static str) -> Result<(), DomainError> {
        self.calls.push(call);
        if self.unreachable {
            return Err(DomainError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

impl DeckRepository for MockDeckRepository {
    fn deck_names(&mut self) -> Result<Vec<String>, DomainError> {
        self.record("deck_names")?;
        Ok(self.decks.clone())
    }

    fn find_note_ids(&mut self, deck: &str) -> Result<Vec<u64>, DomainError> {
        self.record("find_note_ids")?;
        Ok(self.notes_in(deck).iter().map(|n| n.id).collect())
    }

    fn notes_info(&mut self, ids: &[u64]) -> Result<Vec<Note>, DomainError> {
        self.record("notes_info")?;
        Ok(self
            .notes
            .iter()
            .filter(|(_, n)| ids.contains(&n.id))
            .map(|(_, n)| n.clone())
            .collect())
    }

    fn find_models(&mut self, names: &[String]) -> Result<Vec<serde_json::Value>, DomainError> {
        self.record("find_models")?;
        Ok(names
            .iter()
            .filter_map(|name| self.models.get(name).cloned())
            .collect())
    }

    fn create_deck(&mut self, name: &str) -> Result<(), DomainError> {
        self.record("create_deck")?;
        if !self.decks.iter().any(|d| d == name) {
            self.decks.push(name.to_string());
        }
        self.created_decks.push(name.to_string());
        Ok(())
    }

    fn delete_deck(&mut self, name: &str) -> Result<(), DomainError> {
        self.record("delete_deck")?;
        self.decks.retain(|d| d != name);
        self.notes.retain(|(d, _)| d != name);
        self.deleted_decks.push(name.to_string());
        Ok(())
    }

    fn add_notes(&mut self, deck: &str, notes: &[Note]) -> Result<Vec<Option<u64>>, DomainError> {
        self.record("add_notes")?;
        let mut ids = Vec::with_capacity(notes.len());
        for note in notes {
            if self.rejected_models.contains(&note.model_name) {
                ids.push(None);
                continue;
            }
            let id = self.next_id;
            self.next_id += 1;
            let mut created = note.clone();
            created.id = id;
            self.notes.push((deck.to_string(), created));
            ids.push(Some(id));
        }
        Ok(ids)
    }
}

/// Builder for MockDeckRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockDeckRepositoryBuilder {
    decks: Vec<String>,
    notes: Vec<(String, Note)>,
    models: BTreeMap<String, serde_json::Value>,
    rejected_models: HashSet<String>,
    unreachable: bool,
}

impl MockDeckRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            decks: vec![],
            notes: vec![],
            models: BTreeMap::new(),
            rejected_models: HashSet::new(),
            unreachable: false,
        }
    }

    /// Add an empty deck
    pub fn with_deck(mut self, name: &str) -> Self {
        if !self.decks.iter().any(|d| d == name) {
            self.decks.push(name.to_string());
        }
        self
    }

    /// Add a note to a deck, creating the deck if needed
    pub fn with_note(self, deck: &str, note: Note) -> Self {
        let mut builder = self.with_deck(deck);
        builder.notes.push((deck.to_string(), note));
        builder
    }

    /// Add a note type definition returned by find_models
    pub fn with_model(mut self, name: &str, definition: serde_json::Value) -> Self {
        self.models.insert(name.to_string(), definition);
        self
    }

    /// Make add_notes reject every note using this note type
    pub fn rejecting_model(mut self, name: &str) -> Self {
        self.rejected_models.insert(name.to_string());
        self
    }

    /// Make every call fail with a transport error
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn build(self) -> MockDeckRepository {
        MockDeckRepository {
            decks: self.decks,
            notes: self.notes,
            models: self.models,
            rejected_models: self.rejected_models,
            unreachable: self.unreachable,
            next_id: FIRST_CREATED_NOTE_ID,
            created_decks: vec![],
            deleted_decks: vec![],
            calls: vec![],
        }
    }
}

impl Default for MockDeckRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "httpmock", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_note_added_when_finding_ids_then_returns_only_that_decks_notes() {
        let mut mock = MockDeckRepository::builder()
            .with_note("A", Note::new(1, "Basic"))
            .with_note("B", Note::new(2, "Basic"))
            .build();

        let ids = mock.find_note_ids("A").expect("Lookup should succeed");
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn given_deleted_deck_when_listing_then_deck_and_notes_are_gone() {
        let mut mock = MockDeckRepository::builder()
            .with_note("A", Note::new(1, "Basic"))
            .build();

        mock.delete_deck("A").expect("Delete should succeed");

        assert!(mock.deck_names().expect("List should succeed").is_empty());
        assert!(mock.notes_in("A").is_empty());
    }

    #[test]
    fn given_added_notes_when_adding_then_assigns_fresh_ids() {
        let mut mock = MockDeckRepository::builder().build();

        let ids = mock
            .add_notes("A", &[Note::new(0, "Basic"), Note::new(0, "Basic")])
            .expect("Add should succeed");

        assert_eq!(
            ids,
            vec![Some(FIRST_CREATED_NOTE_ID), Some(FIRST_CREATED_NOTE_ID + 1)]
        );
    }

    #[test]
    fn given_unknown_model_name_when_finding_models_then_skips_it() {
        let mut mock = MockDeckRepository::builder()
            .with_model("Basic", serde_json::json!({"name": "Basic"}))
            .build();

        let models = mock
            .find_models(&["Basic".to_string(), "Missing".to_string()])
            .expect("Lookup should succeed");
        assert_eq!(models.len(), 1);
    }

    #[test]
    fn given_unreachable_mock_when_calling_then_records_call_and_fails() {
        let mut mock = MockDeckRepository::builder().unreachable().build();

        let result = mock.create_deck("A");

        assert!(matches!(result, Err(DomainError::Transport(_))));
        assert_eq!(mock.calls(), vec!["create_deck"]);
        assert!(mock.created_decks().is_empty());
    }
}

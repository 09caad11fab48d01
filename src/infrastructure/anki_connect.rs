// src/infrastructure/anki_connect.rs
use crate::application::DeckRepository;
use crate::domain::{DomainError, Note};
use crate::infrastructure::config::AnkiConnectConfig;
use crate::infrastructure::wire::{
    deck_query, AddNotesParams, AnkiRequest, AnkiResponse, CreateDeckParams, CreateNote,
    DeleteDecksParams, FindModelsByNameParams, FindNotesParams, NoteInfo, NotesInfoParams,
};
use reqwest::blocking::Client;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, trace};

/// Blocking AnkiConnect client.
///
/// One HTTP POST per action; failures are returned as they happen, nothing is retried.
pub struct AnkiConnectClient {
    http: Client,
    config: AnkiConnectConfig,
}

impl AnkiConnectClient {
    pub fn new(config: AnkiConnectConfig) -> Result<Self, DomainError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(transport)?;
        debug!(url = %config.url, "Created AnkiConnect client");
        Ok(Self { http, config })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    #[instrument(level = "debug", skip(self, params))]
    fn invoke<P, T>(&self, action: &str, params: Option<P>) -> Result<T, DomainError>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let request = AnkiRequest {
            action,
            version: self.config.api_version,
            params,
        };

        let response: AnkiResponse = self
            .http
            .post(&self.config.url)
            .json(&request)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(transport)?;
        trace!(?response, "AnkiConnect response");

        if let Some(message) = response.error {
            return Err(DomainError::Remote {
                action: action.to_string(),
                message,
            });
        }
        serde_json::from_value(response.result).map_err(|e| {
            DomainError::Transport(format!("Unexpected result for '{action}': {e}"))
        })
    }
}

fn transport(e: reqwest::Error) -> DomainError {
    DomainError::Transport(e.to_string())
}

impl DeckRepository for AnkiConnectClient {
    fn deck_names(&mut self) -> Result<Vec<String>, DomainError> {
        self.invoke("deckNames", None::<()>)
    }

    fn find_note_ids(&mut self, deck: &str) -> Result<Vec<u64>, DomainError> {
        self.invoke(
            "findNotes",
            Some(FindNotesParams {
                query: deck_query(deck),
            }),
        )
    }

    fn notes_info(&mut self, ids: &[u64]) -> Result<Vec<Note>, DomainError> {
        let infos: Vec<NoteInfo> = self.invoke("notesInfo", Some(NotesInfoParams { notes: ids }))?;
        Ok(infos
            .into_iter()
            // AnkiConnect answers unknown ids with an empty object
            .filter(|info| info.note_id != 0)
            .map(Note::from)
            .collect())
    }

    fn find_models(&mut self, names: &[String]) -> Result<Vec<serde_json::Value>, DomainError> {
        self.invoke(
            "findModelsByName",
            Some(FindModelsByNameParams { model_names: names }),
        )
    }

    fn create_deck(&mut self, name: &str) -> Result<(), DomainError> {
        self.invoke::<_, IgnoredAny>("createDeck", Some(CreateDeckParams { deck: name }))?;
        Ok(())
    }

    fn delete_deck(&mut self, name: &str) -> Result<(), DomainError> {
        self.invoke::<_, IgnoredAny>(
            "deleteDecks",
            Some(DeleteDecksParams {
                decks: vec![name],
                cards_too: true,
            }),
        )?;
        Ok(())
    }

    fn add_notes(&mut self, deck: &str, notes: &[Note]) -> Result<Vec<Option<u64>>, DomainError> {
        let notes = notes.iter().map(|n| CreateNote::new(deck, n)).collect();
        self.invoke("addNotes", Some(AddNotesParams { notes }))
    }
}

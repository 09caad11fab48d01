// src/infrastructure/wire.rs
//
// Request and response shapes of the AnkiConnect API (version 6) and their
// mapping onto the domain model. Pure structure, no behavior.
use crate::domain::{Field, Note};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Serialize)]
pub struct AnkiRequest<'a, P> {
    pub action: &'a str,
    pub version: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<P>,
}

/// `result` and `error` are mutually exclusive; a missing key counts as null.
#[derive(Debug, Deserialize)]
pub struct AnkiResponse {
    #[serde(default)]
    pub result: serde_json::Value,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FindNotesParams {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct NotesInfoParams<'a> {
    pub notes: &'a [u64],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindModelsByNameParams<'a> {
    pub model_names: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct CreateDeckParams<'a> {
    pub deck: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDecksParams<'a> {
    pub decks: Vec<&'a str>,
    pub cards_too: bool,
}

#[derive(Debug, Serialize)]
pub struct AddNotesParams<'a> {
    pub notes: Vec<CreateNote<'a>>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateNote<'a> {
    pub deck_name: &'a str,
    pub model_name: &'a str,
    pub fields: BTreeMap<&'a str, &'a str>,
    pub tags: &'a [String],
    pub options: CreateNoteOptions,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteOptions {
    pub allow_duplicate: bool,
    pub duplicate_scope: &'static str,
}

impl<'a> CreateNote<'a> {
    /// Field `order` is dropped: Anki orders fields by the note type definition.
    pub fn new(deck_name: &'a str, note: &'a Note) -> Self {
        Self {
            deck_name,
            model_name: &note.model_name,
            fields: note.field_values().collect(),
            tags: &note.tags,
            options: CreateNoteOptions {
                allow_duplicate: true,
                duplicate_scope: "deck",
            },
        }
    }
}

/// One element of a `notesInfo` result. Extra keys (`cards`, `mod`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoteInfo {
    pub note_id: u64,
    pub tags: Vec<String>,
    pub fields: HashMap<String, NoteField>,
    pub model_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NoteField {
    pub value: String,
    pub order: u64,
}

impl From<NoteInfo> for Note {
    fn from(info: NoteInfo) -> Self {
        Note {
            id: info.note_id,
            tags: info.tags,
            fields: info
                .fields
                .into_iter()
                .map(|(name, f)| (name, Field::new(f.value, f.order)))
                .collect(),
            model_name: info.model_name,
        }
    }
}

/// Anki search matching every note in `deck`, quoted so names with spaces work
pub fn deck_query(deck: &str) -> String {
    format!("\"deck:{}\"", deck.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_notes_info_entry_when_converting_then_maps_all_attributes() {
        let info: NoteInfo = serde_json::from_value(json!({
            "noteId": 1502298033753u64,
            "modelName": "Basic",
            "tags": ["tag", "another_tag"],
            "fields": {
                "Front": {"value": "front content", "order": 0},
                "Back": {"value": "back content", "order": 1}
            },
            "cards": [1498938915662u64],
            "mod": 1718377864
        }))
        .unwrap();

        let note = Note::from(info);

        assert_eq!(note.id, 1502298033753);
        assert_eq!(note.model_name, "Basic");
        assert_eq!(note.tags, vec!["tag", "another_tag"]);
        assert_eq!(note.fields["Back"], Field::new("back content", 1));
    }

    #[test]
    fn given_note_when_building_create_request_then_drops_id_and_order() {
        let note = Note::new(99, "Basic")
            .with_tag("t")
            .with_field("Front", "Q", 0)
            .with_field("Back", "A", 1);

        let body = serde_json::to_value(CreateNote::new("Deck", &note)).unwrap();

        assert_eq!(
            body,
            json!({
                "deckName": "Deck",
                "modelName": "Basic",
                "fields": {"Back": "A", "Front": "Q"},
                "tags": ["t"],
                "options": {"allowDuplicate": true, "duplicateScope": "deck"}
            })
        );
    }

    #[test]
    fn given_request_without_params_when_serializing_then_omits_params() {
        let request: AnkiRequest<'_, ()> = AnkiRequest {
            action: "deckNames",
            version: 6,
            params: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"action": "deckNames", "version": 6})
        );
    }

    #[test]
    fn given_deck_name_with_quotes_when_building_query_then_escapes_them() {
        assert_eq!(deck_query("Test Deck"), r#""deck:Test Deck""#);
        assert_eq!(deck_query(r#"Say "hi""#), r#""deck:Say \"hi\"""#);
    }
}

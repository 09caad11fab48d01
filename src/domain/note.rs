// src/domain/note.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single named value of a note together with its display position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub value: String,
    pub order: u64,
}

impl Field {
    pub fn new(value: impl Into<String>, order: u64) -> Self {
        Self {
            value: value.into(),
            order,
        }
    }
}

/// A note as it is exported: identity, tags, named fields and the model it uses.
///
/// `id` is assigned by Anki; a value of 0 marks a note that does not exist yet.
/// Field names are unique by construction. The map itself carries no order,
/// serialization always emits fields sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    #[serde(rename = "noteId")]
    pub id: u64,
    pub tags: Vec<String>,
    #[serde(serialize_with = "crate::domain::normalize::serialize_sorted_fields")]
    pub fields: HashMap<String, Field>,
    #[serde(rename = "modelName")]
    pub model_name: String,
}

impl Note {
    pub fn new(id: u64, model_name: impl Into<String>) -> Self {
        Self {
            id,
            model_name: model_name.into(),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>, order: u64) -> Self {
        self.fields.insert(name.into(), Field::new(value, order));
        self
    }

    /// Field values keyed by name, the shape AnkiConnect expects when creating notes
    pub fn field_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_str(), field.value.as_str()))
    }
}

// src/ports/json.rs
use crate::domain::{normalized, DomainError, Export};
use crate::ports::{write_document, Codec, Format};
use std::io::{Read, Write};
use tracing::debug;

/// Pretty-printed JSON with two-space indentation.
///
/// JSON has no comments, so no schema header is written; `version` carries it.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn encode(&self, export: &Export, writer: &mut dyn Write) -> Result<(), DomainError> {
        let export = normalized(export);
        let mut document =
            serde_json::to_vec_pretty(&export).map_err(|e| DomainError::encode(Format::Json, e))?;
        document.push(b'\n');
        debug!(notes = export.notes.len(), bytes = document.len(), "Encoded JSON");

        write_document(writer, &document)
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<Export, DomainError> {
        serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                DomainError::Io(e.into())
            } else {
                DomainError::parse(Format::Json, e)
            }
        })
    }
}

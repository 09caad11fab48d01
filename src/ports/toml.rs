// src/ports/toml.rs
use crate::domain::{normalized, DomainError, Export};
use crate::ports::{header_comment, read_document, write_document, Codec, Format};
use serde_json::{Map, Value};
use std::io::{Read, Write};
use tracing::debug;

/// Table-oriented TOML.
///
/// TOML has no `null`: null entries inside model mappings are dropped,
/// a null inside a sequence cannot be written at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlCodec;

impl Codec for TomlCodec {
    fn format(&self) -> Format {
        Format::Toml
    }

    fn encode(&self, export: &Export, writer: &mut dyn Write) -> Result<(), DomainError> {
        let mut export = normalized(export);
        export.models = export
            .models
            .iter()
            .map(without_nulls)
            .collect::<Result<_, _>>()?;

        let body = ::toml::to_string(&export).map_err(|e| DomainError::encode(Format::Toml, e))?;
        debug!(notes = export.notes.len(), bytes = body.len(), "Encoded TOML");

        let mut document = header_comment(&export);
        document.push_str(&body);
        write_document(writer, document.as_bytes())
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<Export, DomainError> {
        let document = read_document(reader, Format::Toml)?;
        ::toml::from_str(&document).map_err(|e| DomainError::parse(Format::Toml, e))
    }
}

fn without_nulls(value: &Value) -> Result<Value, DomainError> {
    match value {
        Value::Null => Err(DomainError::encode(
            Format::Toml,
            "null values inside sequences cannot be represented",
        )),
        Value::Array(items) => items
            .iter()
            .map(without_nulls)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| Ok((k.clone(), without_nulls(v)?)))
            .collect::<Result<Map<_, _>, DomainError>>()
            .map(Value::Object),
        scalar => Ok(scalar.clone()),
    }
}

// src/ports/mod.rs
//! Deck document formats.
//!
//! Every format is a [`Codec`]; [`Format`] picks the codec for a user-supplied
//! name or file extension.

pub mod format;
pub mod json;
pub mod toml;
pub mod yaml;

pub use format::Format;
pub use json::JsonCodec;
pub use self::toml::TomlCodec;
pub use yaml::YamlCodec;

use crate::domain::{DomainError, Export};
use std::io::{ErrorKind, Read, Write};

/// Symmetric encoder/decoder for one document format.
///
/// `encode` canonicalizes a copy of the export before rendering and only
/// touches the writer once the complete document exists. `decode` either
/// returns a fully populated export or an error.
pub trait Codec {
    fn format(&self) -> Format;

    fn encode(&self, export: &Export, writer: &mut dyn Write) -> Result<(), DomainError>;

    fn decode(&self, reader: &mut dyn Read) -> Result<Export, DomainError>;

    fn encode_to_string(&self, export: &Export) -> Result<String, DomainError> {
        let mut buffer = Vec::new();
        self.encode(export, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| DomainError::encode(self.format(), e))
    }

    fn decode_str(&self, document: &str) -> Result<Export, DomainError> {
        self.decode(&mut document.as_bytes())
    }
}

fn write_document(writer: &mut dyn Write, document: &[u8]) -> Result<(), DomainError> {
    writer.write_all(document)?;
    writer.flush()?;
    Ok(())
}

fn read_document(reader: &mut dyn Read, format: Format) -> Result<String, DomainError> {
    let mut document = String::new();
    match reader.read_to_string(&mut document) {
        Ok(_) => Ok(document),
        Err(e) if e.kind() == ErrorKind::InvalidData => Err(DomainError::parse(format, e)),
        Err(e) => Err(e.into()),
    }
}

fn header_comment(export: &Export) -> String {
    format!(
        "# {} {}\n",
        crate::constants::EXPORT_HEADER_PREFIX,
        export.version
    )
}

// src/ports/format.rs
use crate::domain::{DomainError, Export};
use crate::ports::{Codec, JsonCodec, TomlCodec, YamlCodec};
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Supported deck document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Table-oriented TOML, the default export format.
    Toml,
    /// Pretty-printed JSON.
    Json,
    /// Indentation-based YAML with every string quoted.
    Yaml,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Toml, Format::Json, Format::Yaml];

    /// Canonical file extension, without the dot
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Detects the format from a file extension.
    ///
    /// # Errors
    ///
    /// `UnsupportedFormat` if the path has no or an unknown extension.
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.parse(),
            None => Err(DomainError::UnsupportedFormat(format!(
                "{} (no file extension)",
                path.display()
            ))),
        }
    }

    pub fn codec(&self) -> &'static dyn Codec {
        match self {
            Self::Toml => &TomlCodec,
            Self::Json => &JsonCodec,
            Self::Yaml => &YamlCodec,
        }
    }

    pub fn encode(&self, export: &Export, writer: &mut dyn Write) -> Result<(), DomainError> {
        self.codec().encode(export, writer)
    }

    pub fn decode(&self, reader: &mut dyn Read) -> Result<Export, DomainError> {
        self.codec().decode(reader)
    }
}

impl FromStr for Format {
    type Err = DomainError;

    /// Accepts format names, their aliases and file extensions with or without
    /// the leading dot, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let name = token.strip_prefix('.').unwrap_or(token).to_lowercase();
        match name.as_str() {
            "toml" | "table" | "table-format" => Ok(Self::Toml),
            "json" | "tree" | "tree-format" => Ok(Self::Json),
            "yaml" | "yml" | "indented" | "indented-format" => Ok(Self::Yaml),
            _ => Err(DomainError::UnsupportedFormat(token.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

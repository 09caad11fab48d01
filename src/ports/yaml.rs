// src/ports/yaml.rs
use crate::domain::{normalized, DomainError, Export};
use crate::ports::{header_comment, read_document, write_document, Codec, Format};
use serde_yaml_ng::{Mapping, Value};
use std::fmt::Write as _;
use std::io::{Read, Write};
use tracing::debug;

const INDENT: usize = 2;

/// Block-style YAML.
///
/// Every string, keys included, is written double-quoted so that values such
/// as `123`, `true` or `null` come back as strings from any YAML reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl Codec for YamlCodec {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn encode(&self, export: &Export, writer: &mut dyn Write) -> Result<(), DomainError> {
        let export = normalized(export);
        let tree =
            serde_yaml_ng::to_value(&export).map_err(|e| DomainError::encode(Format::Yaml, e))?;

        let mut document = header_comment(&export);
        match &tree {
            Value::Mapping(map) => write_mapping(&mut document, map, 0, false)?,
            other => return Err(unexpected(other)),
        }
        debug!(notes = export.notes.len(), bytes = document.len(), "Encoded YAML");

        write_document(writer, document.as_bytes())
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<Export, DomainError> {
        let document = read_document(reader, Format::Yaml)?;
        serde_yaml_ng::from_str(&document).map_err(|e| DomainError::parse(Format::Yaml, e))
    }
}

fn write_mapping(
    out: &mut String,
    map: &Mapping,
    indent: usize,
    continues_line: bool,
) -> Result<(), DomainError> {
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 || !continues_line {
            pad(out, indent);
        }
        let key = scalar(key).ok_or_else(|| unexpected(key))?;
        out.push_str(&key);
        out.push(':');
        match value {
            Value::Mapping(child) if !child.is_empty() => {
                out.push('\n');
                write_mapping(out, child, indent + INDENT, false)?;
            }
            Value::Sequence(items) if !items.is_empty() => {
                out.push('\n');
                write_sequence(out, items, indent + INDENT, false)?;
            }
            leaf => {
                out.push(' ');
                out.push_str(&inline(leaf)?);
                out.push('\n');
            }
        }
    }
    Ok(())
}

fn write_sequence(
    out: &mut String,
    items: &[Value],
    indent: usize,
    continues_line: bool,
) -> Result<(), DomainError> {
    for (i, item) in items.iter().enumerate() {
        if i > 0 || !continues_line {
            pad(out, indent);
        }
        out.push_str("- ");
        match item {
            Value::Mapping(child) if !child.is_empty() => {
                write_mapping(out, child, indent + INDENT, true)?;
            }
            Value::Sequence(nested) if !nested.is_empty() => {
                write_sequence(out, nested, indent + INDENT, true)?;
            }
            leaf => {
                out.push_str(&inline(leaf)?);
                out.push('\n');
            }
        }
    }
    Ok(())
}

/// Scalars and empty collections, which fit on the current line
fn inline(value: &Value) -> Result<String, DomainError> {
    match value {
        Value::Mapping(map) if map.is_empty() => Ok("{}".to_string()),
        Value::Sequence(items) if items.is_empty() => Ok("[]".to_string()),
        other => scalar(other).ok_or_else(|| unexpected(other)),
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(quote(s)),
        _ => None,
    }
}

/// YAML double-quoted scalar. Characters outside the YAML printable set,
/// including the Unicode line separators, are escaped.
fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{2027}' | '\u{202a}'..='\u{d7ff}' => quoted.push(c),
            '\u{e000}'..='\u{fefe}' | '\u{ff00}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}' => {
                quoted.push(c)
            }
            other => {
                let _ = write!(quoted, "\\u{:04X}", other as u32);
            }
        }
    }
    quoted.push('"');
    quoted
}

fn pad(out: &mut String, indent: usize) {
    out.extend(std::iter::repeat(' ').take(indent));
}

fn unexpected(value: &Value) -> DomainError {
    DomainError::encode(Format::Yaml, format!("unsupported value {value:?}"))
}

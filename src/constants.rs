// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose and usage context.

/// Version of the exported document layout, written as `version` into every export.
///
/// Used in: `domain/export.rs`
pub const SCHEMA_VERSION: u32 = 1;

/// Prefix of the comment line written at the top of TOML and YAML exports.
///
/// The line is informational only; decoders never require it.
///
/// Used in: `ports/toml.rs`, `ports/yaml.rs`
pub const EXPORT_HEADER_PREFIX: &str = "ankideck export schema version =";

/// Address AnkiConnect listens on when the add-on runs with its default settings.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_ANKI_CONNECT_URL: &str = "http://127.0.0.1:8765";

/// AnkiConnect API version sent with each request.
///
/// Version 6 is the first one returning `{result, error}` envelopes for every action.
///
/// Used in: `infrastructure/config.rs`
pub const ANKI_CONNECT_API_VERSION: u16 = 6;

/// Seconds to wait for AnkiConnect before giving up on a request.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Config file looked up in the platform config directory when `--config` is not given.
///
/// Resolves to e.g. `~/.config/ankideck/config.toml` on Linux.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_FILE: &str = "ankideck/config.toml";

// src/infrastructure/config.rs
use crate::constants::{
    ANKI_CONNECT_API_VERSION, CONFIG_FILE, DEFAULT_ANKI_CONNECT_URL, DEFAULT_TIMEOUT_SECS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration file
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub anki_connect: AnkiConnectConfig,
}

/// Where and how to reach AnkiConnect
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AnkiConnectConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_api_version")]
    pub api_version: u16,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_url() -> String { DEFAULT_ANKI_CONNECT_URL.to_string() }
fn default_api_version() -> u16 { ANKI_CONNECT_API_VERSION }
fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT_SECS }

impl Default for AnkiConnectConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config {}", path.display()))?;

        Ok(config)
    }

    /// Platform config location, e.g. `~/.config/ankideck/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// An explicitly given file must exist; the default location is optional
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!(?path, "Using config file");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.anki_connect.url = url;
        }
        self
    }
}

// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to reach AnkiConnect: {0}")]
    Transport(String),
    #[error("AnkiConnect rejected '{action}': {message}")]
    Remote { action: String, message: String },
    #[error("Invalid {format} document: {message}")]
    Parse { format: String, message: String },
    #[error("Cannot encode deck as {format}: {message}")]
    Encode { format: String, message: String },
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("{0}")]
    Precondition(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DomainError {
    pub fn parse(format: impl ToString, message: impl ToString) -> Self {
        Self::Parse {
            format: format.to_string(),
            message: message.to_string(),
        }
    }

    pub fn encode(format: impl ToString, message: impl ToString) -> Self {
        Self::Encode {
            format: format.to_string(),
            message: message.to_string(),
        }
    }
}


//! Error type shared by the library modules.
//!
//! Command handlers wrap these in `anyhow::Error`; the library itself
//! returns [`StudyError`] so callers can match on the failure kind
//! (a rejected state transition is not the same thing as a bad report file).

use crate::libs::session::SessionState;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudyError {
    /// Operation attempted from the wrong engine state.
    #[error("Cannot {operation} while the session is {state}")]
    InvalidState { operation: &'static str, state: SessionState },

    #[error("Malformed duration '{text}': {reason}")]
    MalformedDuration { text: String, reason: &'static str },

    #[error("Malformed report {}: {reason}", path.display())]
    MalformedReport { path: PathBuf, reason: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StudyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StudyError::Io { path: path.into(), source }
    }

    pub(crate) fn malformed_duration(text: &str, reason: &'static str) -> Self {
        StudyError::MalformedDuration {
            text: text.to_string(),
            reason,
        }
    }
}

pub type Result<T, E = StudyError> = std::result::Result<T, E>;

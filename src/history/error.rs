//! Session history error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing the history log.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The history file or its directory could not be read or written.
    #[error("history file {path} is not accessible: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be encoded.
    #[error("failed to encode session record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl HistoryError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Io { .. } => "check permissions on the data directory or pass --data-dir",
            Self::Encode(_) => "this is a bug; please report it",
        }
    }
}

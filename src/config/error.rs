//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `recent_limit` is out of range.
    #[error("invalid configuration: recent_limit must be 1-50, got {0}")]
    RecentLimitOutOfRange(usize),

    /// `history_file` is blank.
    #[error("invalid configuration: history_file must not be empty")]
    EmptyHistoryFile,

    /// No home directory to place the data dir in.
    #[error("could not determine a home directory; set STUDY_BUDDY_HOME")]
    NoHomeDir,
}

impl ConfigError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Read { .. } => "check the file permissions",
            Self::Parse { .. } => "fix the JSON syntax or delete the file to use defaults",
            Self::RecentLimitOutOfRange(_) => "set recent_limit between 1 and 50",
            Self::EmptyHistoryFile => "set history_file to a file name such as history.json",
            Self::NoHomeDir => "pass --data-dir or set STUDY_BUDDY_HOME",
        }
    }
}

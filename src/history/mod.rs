//! Append-only session history.
//!
//! Sessions are stored as a pretty-printed JSON array in a single file.
//! A missing or empty file reads as no history. A malformed file is
//! treated the same way on append, so one bad edit never blocks logging.

pub mod error;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

pub use error::HistoryError;

use crate::types::{EnergyState, SessionPlan, TerminationReason};

// ============================================================================
// SessionRecord
// ============================================================================

/// One finished (or skipped, or aborted) study session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub energy: EnergyState,
    pub plan: SessionPlan,
    pub outcome: TerminationReason,
}

impl SessionRecord {
    /// Creates a record stamped with a fresh id and the current local time.
    pub fn new(
        subject: Option<String>,
        energy: EnergyState,
        plan: SessionPlan,
        outcome: TerminationReason,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Local::now(),
            subject,
            energy,
            plan,
            outcome,
        }
    }
}

// ============================================================================
// HistoryStore
// ============================================================================

/// File-backed session log.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a record, creating the file and its directory as needed.
    pub fn append(&self, record: &SessionRecord) -> Result<(), HistoryError> {
        let mut records = match self.load() {
            Ok(records) => records,
            Err(LoadError::Malformed(e)) => {
                warn!(path = %self.path.display(), error = %e, "history file is malformed, starting fresh");
                Vec::new()
            }
            Err(LoadError::Io(e)) => return Err(self.io_error(e)),
        };
        records.push(record.clone());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        debug!(id = %record.id, total = records.len(), "session logged");
        Ok(())
    }

    /// Returns up to `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, HistoryError> {
        let records = match self.load() {
            Ok(records) => records,
            Err(LoadError::Malformed(e)) => {
                warn!(path = %self.path.display(), error = %e, "history file is malformed");
                Vec::new()
            }
            Err(LoadError::Io(e)) => return Err(self.io_error(e)),
        };

        Ok(records.into_iter().rev().take(limit).collect())
    }

    fn load(&self) -> Result<Vec<SessionRecord>, LoadError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LoadError::Io(e)),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(LoadError::Malformed)
    }

    fn io_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

enum LoadError {
    Io(std::io::Error),
    Malformed(serde_json::Error),
}

// ============================================================================
// Tests
// ============================================================================

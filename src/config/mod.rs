//! Application configuration.
//!
//! Settings live in `config.json` inside the data directory. Every field
//! has a serde default, so a partial file (or no file at all) is fine.

pub mod error;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "STUDY_BUDDY_HOME";

/// Data directory name under the user's home.
const DEFAULT_DIR_NAME: &str = ".study-buddy";

/// Config file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

fn default_history_file() -> String {
    "history.json".to_string()
}

fn default_recent_limit() -> usize {
    3
}

fn default_confirm_before_start() -> bool {
    true
}

/// Study Buddy settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Where history and config live. Filled in by [`AppConfig::load`].
    #[serde(skip)]
    pub data_dir: PathBuf,

    /// History file name, relative to the data directory.
    #[serde(default = "default_history_file")]
    pub history_file: String,

    /// How many sessions `history` shows by default (1-50).
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Ask for confirmation before running a plan.
    #[serde(default = "default_confirm_before_start")]
    pub confirm_before_start: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            history_file: default_history_file(),
            recent_limit: default_recent_limit(),
            confirm_before_start: default_confirm_before_start(),
        }
    }
}

impl AppConfig {
    /// Resolves the data directory: explicit override, then `STUDY_BUDDY_HOME`,
    /// then `~/.study-buddy`.
    pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = explicit {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_DIR_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Loads `config.json` from the data directory, or defaults if absent.
    pub fn load(data_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let data_dir = data_dir.into();
        let path = data_dir.join(CONFIG_FILE_NAME);

        let mut config = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<AppConfig>(&content)
                .map_err(|source| ConfigError::Parse {
                    path: path.clone(),
                    source,
                })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                AppConfig::default()
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        config.data_dir = data_dir;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=50).contains(&self.recent_limit) {
            return Err(ConfigError::RecentLimitOutOfRange(self.recent_limit));
        }
        if self.history_file.trim().is_empty() {
            return Err(ConfigError::EmptyHistoryFile);
        }
        Ok(())
    }

    /// Full path of the history file.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(&self.history_file)
    }
}

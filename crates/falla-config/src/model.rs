use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigError;

const DEFAULT_DATABASE_FILE: &str = "falla_ledger.sqlite3";

/// Stores user-configurable preferences for the ledger CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub currency: String,
    #[serde(default = "Config::default_currency_precision")]
    pub currency_precision: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom SQLite file. Defaults to `<data dir>/falla_ledger.sqlite3`.
    pub database_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "EUR".into(),
            currency_precision: Self::default_currency_precision(),
            database_path: None,
            log_filter: None,
        }
    }
}

impl Config {
    pub fn default_currency_precision() -> u8 {
        2
    }

    pub fn resolve_database_path(&self, data_dir: &Path) -> PathBuf {
        match &self.database_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => data_dir.join(path),
            None => data_dir.join(DEFAULT_DATABASE_FILE),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".into()));
        }
        if self.currency_precision > 6 {
            return Err(ConfigError::Invalid(format!(
                "currency precision {} is out of range (0-6)",
                self.currency_precision
            )));
        }
        Ok(())
    }
}

/// Platform data directory used when nothing overrides it.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".falla_ledger")
}

//! Startup settings read from the environment.

use std::path::PathBuf;

use dropdown::{QueryRetention, DEFAULT_CELL_WIDTH_PX};
use simplelog::LevelFilter;
use thiserror::Error;

pub const LOG_LEVEL_VAR: &str = "ESTIMATOR_LOG_LEVEL";
pub const LOG_FILE_VAR: &str = "ESTIMATOR_LOG_FILE";
pub const CELL_WIDTH_VAR: &str = "ESTIMATOR_CELL_WIDTH";
pub const QUERY_RETENTION_VAR: &str = "ESTIMATOR_QUERY_RETENTION";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("ESTIMATOR_LOG_LEVEL: unknown level {0:?}")]
    LogLevel(String),
    #[error("ESTIMATOR_CELL_WIDTH: expected a positive integer, got {0:?}")]
    CellWidth(String),
    #[error("ESTIMATOR_QUERY_RETENTION: expected \"remember\" or \"reset\", got {0:?}")]
    QueryRetention(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_level: LevelFilter,
    /// Explicit log path; the rotated cache log is used when unset.
    pub log_file: Option<PathBuf>,
    /// Logical pixels per column when the terminal reports no pixel size.
    pub cell_width_px: u32,
    pub query_retention: QueryRetention,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            log_file: None,
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
            query_retention: QueryRetention::Remember,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from `lookup`, falling back to defaults for unset or
    /// blank keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut settings = Self::default();

        if let Some(level) = get(LOG_LEVEL_VAR) {
            settings.log_level = level
                .parse()
                .map_err(|_| SettingsError::LogLevel(level.clone()))?;
        }
        if let Some(path) = get(LOG_FILE_VAR) {
            settings.log_file = Some(PathBuf::from(path));
        }
        if let Some(width) = get(CELL_WIDTH_VAR) {
            settings.cell_width_px = match width.parse::<u32>() {
                Ok(px) if px > 0 => px,
                _ => return Err(SettingsError::CellWidth(width)),
            };
        }
        if let Some(retention) = get(QUERY_RETENTION_VAR) {
            settings.query_retention = match retention.to_ascii_lowercase().as_str() {
                "remember" => QueryRetention::Remember,
                "reset" => QueryRetention::ResetOnClose,
                _ => return Err(SettingsError::QueryRetention(retention)),
            };
        }
        Ok(settings)
    }
}

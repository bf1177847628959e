use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to initialise logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("no cache directory for the log file; set ESTIMATOR_LOG_FILE")]
    NoLogDir,
}

mod app;
mod error;
mod form;
mod paths;
mod settings;

use std::fs::{self, File};

use simplelog::{Config, WriteLogger};

use crate::error::AppError;
use crate::settings::Settings;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    init_logging(&settings)?;
    log::debug!("settings: {settings:?}");

    app::run(&settings)?;
    Ok(())
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(settings: &Settings) -> Result<(), AppError> {
    let path = match &settings.log_file {
        Some(path) => path.clone(),
        None => {
            let dir = paths::cache_dir().ok_or(AppError::NoLogDir)?;
            fs::create_dir_all(&dir)?;
            paths::rotate_logs(&dir);
            paths::latest_log(&dir)
        }
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(&path)?;
    WriteLogger::init(settings.log_level, Config::default(), file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}

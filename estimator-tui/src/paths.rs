//! Log file location under the platform cache directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "estimator";
const APPLICATION: &str = "estimator-tui";

const LATEST_LOG: &str = "latest.log";

/// Archived logs kept besides the current one.
const MAX_OLD_LOGS: usize = 10;

/// - Linux: `$XDG_CACHE_HOME/estimator-tui` or `~/.cache/estimator-tui`
/// - macOS: `~/Library/Caches/dev.estimator.estimator-tui`
/// - Windows: `C:\Users\<User>\AppData\Local\estimator\estimator-tui\cache`
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

pub fn latest_log(dir: &Path) -> PathBuf {
    dir.join(LATEST_LOG)
}

/// Move the previous run's log aside under a timestamped name and drop the
/// oldest archives.
pub fn rotate_logs(dir: &Path) {
    let latest = latest_log(dir);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, dir.join(format!("{stamp}.log")));
    }
    prune_archives(dir, MAX_OLD_LOGS);
}

fn prune_archives(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut archives: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();
    if archives.len() <= keep {
        return;
    }

    // Oldest first.
    archives.sort_by_key(|entry| entry.metadata().and_then(|m| m.modified()).ok());
    for entry in &archives[..archives.len() - keep] {
        let _ = fs::remove_file(entry.path());
    }
}

//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "ariadom";
const APPLICATION: &str = "combobox-demo";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Default config file.
///
/// - Linux: `$XDG_CONFIG_HOME/combobox-demo/config.toml`
/// - macOS: `~/Library/Application Support/dev.ariadom.combobox-demo/config.toml`
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Path of the log for the current run.
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("latest.log"))
}

/// Archive the previous run's log under a timestamped name and prune old
/// archives. Call before creating the new log file.
pub fn rotate_logs() {
    let Some(dirs) = project_dirs() else { return };
    let cache = dirs.cache_dir();
    let latest = cache.join("latest.log");

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{}.log", timestamp)));
    }

    cleanup_old_logs(cache, MAX_OLD_LOGS);
}

/// Remove archived logs beyond the newest `keep`.
fn cleanup_old_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != "latest.log"
        })
        .collect();

    // Oldest first; archive names are timestamps, so they break ties
    logs.sort_by_key(|e| {
        let modified = e.metadata().and_then(|m| m.modified()).ok();
        (modified, e.file_name())
    });

    let excess = logs.len().saturating_sub(keep);
    for entry in logs.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}

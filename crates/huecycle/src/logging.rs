//! File logging.
//!
//! The terminal belongs to the animation while it runs, so log output goes
//! to a file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use huecycle_config::Config;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "huecycle.log";

/// Default log location under the platform's local data directory.
pub fn default_log_path() -> Option<PathBuf> {
    Config::project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Install the global subscriber writing to `path` (or the default path).
///
/// Filtering follows `RUST_LOG` and defaults to `info`. If the file cannot
/// be opened, logging stays disabled.
pub fn init(path: Option<&Path>) {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_log_path) else {
        return;
    };

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("huecycle: logging disabled, cannot open {}: {err}", path.display());
            return;
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

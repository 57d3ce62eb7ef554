/// Definition store modules organized by feature
mod schedule;

pub use schedule::{owners, parse_definitions};

use std::path::{Path, PathBuf};

use tracing::info;

/// Error types for loading schedule definitions
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read schedules file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse schedules file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON file holding every user's schedule definitions
///
/// The file is re-read on every load so edits are picked up without a restart.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!("Using schedule definitions from {}", path.display());
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use unscramble_core::{Statistics, StatsStore};

pub(crate) const STATS_FILE: &str = "stats.v1.json";

#[derive(Error, Debug)]
pub(crate) enum StoreError {
    #[error("Could not determine data directory")]
    NoDataDirectory,
    #[error("Statistics file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Statistics file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Statistics kept as a pretty printed JSON file.
#[derive(Debug)]
pub(crate) struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub(crate) fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STATS_FILE),
        }
    }

    /// Uses OS-standard directories, e.g. `~/.local/share/unscramble/` on Linux.
    pub(crate) fn in_data_dir() -> Result<Self, StoreError> {
        ProjectDirs::from("", "", "unscramble")
            .map(|dirs| Self::new(dirs.data_dir()))
            .ok_or(StoreError::NoDataDirectory)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    type Error = StoreError;

    fn load(&mut self) -> Result<Option<Statistics>, Self::Error> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, stats: &Statistics) -> Result<(), Self::Error> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        // write then rename so a crash never leaves half a file behind
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(stats)?)?;
        fs::rename(&tmp, &self.path)?;
        log::trace!("Statistics saved to {}", self.path.display());
        Ok(())
    }

    fn erase(&mut self) -> Result<(), Self::Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

//! File-backed history store.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::HISTORY_KEY;
use crate::traits::{HistoryError, HistoryStore};

/// History store keeping one JSON file per key inside a directory.
///
/// The entry lives at `<dir>/bms-search-history.json` as a plain array of strings.
/// Saves write a sibling temp file and rename it over the entry, so concurrent
/// writers resolve to whichever rename lands last.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    dir: PathBuf,
}

impl FileHistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", HISTORY_KEY))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir
            .join(format!(".{}.{}.tmp", HISTORY_KEY, std::process::id()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Result<Vec<String>, HistoryError> {
        let path = self.path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(&path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, entries: &[String]) -> Result<(), HistoryError> {
        std::fs::create_dir_all(&self.dir)?;
        let encoded = serde_json::to_string(entries)?;

        let temp = self.temp_path();
        std::fs::write(&temp, encoded)?;
        std::fs::rename(&temp, self.path())?;

        debug!(path = %self.path().display(), count = entries.len(), "Saved search history");
        Ok(())
    }
}

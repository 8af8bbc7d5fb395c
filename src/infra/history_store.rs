//! JSON persistence for the optimization history.
//!
//! The store loads once when opened and writes the whole log back after every
//! mutation. A missing file is an empty history; a corrupt one is logged and
//! replaced on the next save.

use crate::domain::{History, HistoryEntry, HistoryError};
use std::fs;
use std::path::{Path, PathBuf};

pub struct HistoryStore {
    path: PathBuf,
    history: History,
}

impl HistoryStore {
    pub fn open(path: impl Into<PathBuf>, limit: usize) -> Self {
        let path = path.into();
        let history = load(&path, limit);
        Self { path, history }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn record(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.history.push(entry);
        self.save()
    }

    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.history.clear();
        self.save()
    }

    fn save(&self) -> Result<(), HistoryError> {
        let io_err = |source| HistoryError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let entries: Vec<&HistoryEntry> = self.history.iter().collect();
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json).map_err(io_err)?;

        log::debug!(
            "Saved {} history entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn load(path: &Path, limit: usize) -> History {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return History::with_limit(limit);
        }
        Err(err) => {
            log::warn!("Failed to read history at {}: {}", path.display(), err);
            return History::with_limit(limit);
        }
    };

    match serde_json::from_str::<Vec<HistoryEntry>>(&contents) {
        Ok(entries) => History::from_entries(limit, entries),
        Err(err) => {
            log::warn!("Discarding unreadable history at {}: {}", path.display(), err);
            History::with_limit(limit)
        }
    }
}

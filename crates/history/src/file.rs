use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{HistoryError, HistoryStore, RecentSearches};

/// Host-side store holding the serialized list in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Result<RecentSearches, HistoryError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => crate::parse_recent_searches(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(RecentSearches::default()),
            Err(e) => Err(HistoryError::Io(format!("read {:?}: {e}", self.path))),
        }
    }

    fn save(&mut self, searches: &RecentSearches) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| HistoryError::Io(format!("create {parent:?}: {e}")))?;
        }
        let raw = crate::encode_recent_searches(searches)?;
        std::fs::write(&self.path, raw)
            .map_err(|e| HistoryError::Io(format!("write {:?}: {e}", self.path)))
    }
}

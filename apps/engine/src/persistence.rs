//! JSON save-game store.
//!
//! One match per file. Writes go to a sibling temp file first and are
//! renamed into place, so a crash never leaves a half-written save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::state::MatchState;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("save file is not a valid match: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub fn save(&self, state: &MatchState) -> Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_vec_pretty(state)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), round_no = state.round_no, "Match saved");
        Ok(())
    }

    /// `Ok(None)` when there is no save file.
    pub fn load(&self) -> Result<Option<MatchState>, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state: MatchState = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), round_no = state.round_no, "Match loaded");
        Ok(Some(state))
    }

    /// Remove the save file; a missing file is not an error.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Save cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

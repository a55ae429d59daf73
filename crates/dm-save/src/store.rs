//! JSON files on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dm_core::{SaveStore, ScoreEntry, Snapshot, StoreError, StoreResult};
use serde::Serialize;
use tracing::debug;

/// Default file name for the saved game.
pub const DEFAULT_SAVE_FILE: &str = "dungeon-save.json";
/// Default file name for the score history.
pub const DEFAULT_SCORES_FILE: &str = "dungeon-scores.json";

/// Saves and scores kept as JSON files.
#[derive(Debug, Clone)]
pub struct FileStore {
    save_path: PathBuf,
    scores_path: PathBuf,
}

impl FileStore {
    /// Store files at the given paths.
    pub fn new(save_path: impl Into<PathBuf>, scores_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
            scores_path: scores_path.into(),
        }
    }

    /// Store files under `dir` with the default names.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_SAVE_FILE), dir.join(DEFAULT_SCORES_FILE))
    }

    /// Path of the saved game.
    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Path of the score history.
    pub fn scores_path(&self) -> &Path {
        &self.scores_path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE, DEFAULT_SCORES_FILE)
    }
}

impl SaveStore for FileStore {
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        write_json(&self.save_path, snapshot)?;
        debug!(path = %self.save_path.display(), "wrote save file");
        Ok(())
    }

    fn load(&self) -> StoreResult<Snapshot> {
        let data = match fs::read_to_string(&self.save_path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(StoreError::NoSave),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&data)?)
    }

    fn record_score(&self, entry: ScoreEntry) -> StoreResult<()> {
        let mut scores = self.scores()?;
        scores.push(entry);
        write_json(&self.scores_path, &scores)?;
        debug!(path = %self.scores_path.display(), entries = scores.len(), "wrote scores");
        Ok(())
    }

    fn scores(&self) -> StoreResult<Vec<ScoreEntry>> {
        read_scores(&self.scores_path)
    }
}

/// Read a score history file. A missing file is an empty history.
pub fn read_scores(path: &Path) -> StoreResult<Vec<ScoreEntry>> {
    match fs::read_to_string(path) {
        Ok(data) => Ok(serde_json::from_str(&data)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Pretty-print `value` into `path`, creating parent directories.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> StoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

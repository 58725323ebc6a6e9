//! High score persistence
//!
//! Features:
//! - Bare JSON array on disk
//! - Atomic replace (write tmp, then rename over the save)
//! - Corrupt or missing data reads as an empty table

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::highscores::HighScores;

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed data: {0}")]
    Format(#[from] serde_json::Error),
}

/// Where high scores live between runs
pub trait ScoreStore {
    fn load(&mut self) -> Result<HighScores, PersistError>;
    fn save(&mut self, scores: &HighScores) -> Result<(), PersistError>;
}

/// Load the table, treating any failure as an empty table
pub fn load_or_empty(store: &mut dyn ScoreStore) -> HighScores {
    match store.load() {
        Ok(scores) => {
            log::info!("Loaded {} high scores", scores.len());
            scores
        }
        Err(PersistError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No high scores found, starting fresh");
            HighScores::new()
        }
        Err(e) => {
            log::warn!("Discarding unreadable high scores: {e}");
            HighScores::new()
        }
    }
}

/// Save the table; failures are logged and swallowed
pub fn save_or_log(store: &mut dyn ScoreStore, scores: &HighScores) {
    match store.save(scores) {
        Ok(()) => log::info!("High scores saved ({} entries)", scores.len()),
        Err(e) => log::warn!("Failed to save high scores: {e}"),
    }
}

/// Parse a stored table; out-of-order or overlong lists are normalized
pub fn parse_scores(json: &str) -> Result<HighScores, PersistError> {
    let raw: Vec<u64> = serde_json::from_str(json)?;
    Ok(HighScores::from_scores(raw))
}

/// File-backed store (one JSON file)
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub const DEFAULT_FILE: &'static str = "gravitas_highscores.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<HighScores, PersistError> {
        let json = std::fs::read_to_string(&self.path)?;
        parse_scores(&json)
    }

    fn save(&mut self, scores: &HighScores) -> Result<(), PersistError> {
        let json = serde_json::to_string(scores)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory store holding the serialized form (hosts without a filesystem, tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub data: Option<String>,
    pub saves: u32,
}

impl MemoryStore {
    pub fn with_data(json: impl Into<String>) -> Self {
        Self {
            data: Some(json.into()),
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<HighScores, PersistError> {
        match &self.data {
            Some(json) => parse_scores(json),
            None => Ok(HighScores::new()),
        }
    }

    fn save(&mut self, scores: &HighScores) -> Result<(), PersistError> {
        self.data = Some(serde_json::to_string(scores)?);
        self.saves += 1;
        Ok(())
    }
}

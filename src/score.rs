use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ScoreError;

/// Durable storage for the single best score.
pub trait ScoreStore {
    /// Returns the stored high score, or 0 when absent or unreadable.
    fn get(&self) -> u32;

    /// Persists `value` as the new high score.
    fn set(&mut self, value: u32) -> Result<(), ScoreError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// High score kept in a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonScoreStore {
    fn get(&self) -> u32 {
        match load_high_score_from_path(&self.path) {
            Ok(score) => score,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "ignoring unreadable score file");
                0
            }
        }
    }

    fn set(&mut self, value: u32) -> Result<(), ScoreError> {
        save_high_score_to_path(&self.path, value)
    }
}

/// Process-local store, used when nothing should touch the disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryScoreStore {
    high_score: u32,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self) -> u32 {
        self.high_score
    }

    fn set(&mut self, value: u32) -> Result<(), ScoreError> {
        self.high_score = value;
        Ok(())
    }
}

/// Returns `Ok(0)` when the score file does not yet exist (first run).
fn load_high_score_from_path(path: &Path) -> Result<u32, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str::<ScoreFile>(&raw)?.high_score)
}

fn save_high_score_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload)?;

    fs::write(path, json)?;
    Ok(())
}

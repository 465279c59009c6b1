//! High-score persistence: a single integer behind a small key/value store.

use std::fs;
use std::io;
use std::path::PathBuf;

use bevy::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HighScoreError {
    #[error("high score storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("stored high score is not a number: {0:?}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, HighScoreError>;

/// Somewhere the best score survives between runs.
pub trait HighScoreStore: Send + Sync + 'static {
    fn load(&self) -> Result<u32>;
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Keeps the high score as plain text in one file.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScoreStore {
    /// A missing file means nobody has scored yet.
    fn load(&self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let trimmed = text.trim();
        trimmed
            .parse()
            .map_err(|_| HighScoreError::Parse(trimmed.to_string()))
    }

    fn save(&mut self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// In-process store, for tests and builds without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    score: u32,
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<u32> {
        Ok(self.score)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.score = score;
        Ok(())
    }
}

/// Resource wrapping whichever store the app was built with.
#[derive(Resource)]
pub struct HighScores(pub Box<dyn HighScoreStore>);

impl HighScores {
    /// Reads the stored score, falling back to 0 when it can't be read.
    pub fn load_or_default(&self) -> u32 {
        match self.0.load() {
            Ok(score) => score,
            Err(e) => {
                warn!("Error loading high score: {e}");
                0
            }
        }
    }

    /// Writes a new best score; failures are logged and otherwise ignored.
    pub fn record(&mut self, score: u32) {
        match self.0.save(score) {
            Ok(()) => debug!("High score {score} saved"),
            Err(e) => warn!("Error saving high score: {e}"),
        }
    }
}

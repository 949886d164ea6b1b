use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::GameError;

/// Where the single high-score integer lives between runs.
#[derive(Debug)]
pub enum HighScoreStore {
    File(PathBuf),
    Memory(Option<String>),
}

impl HighScoreStore {
    pub fn file(path: impl AsRef<Path>) -> Self {
        HighScoreStore::File(path.as_ref().to_path_buf())
    }

    fn path(&self) -> PathBuf {
        match self {
            HighScoreStore::File(path) => path.clone(),
            HighScoreStore::Memory(_) => PathBuf::from("<memory>"),
        }
    }

    fn read_raw(&self) -> Result<String, GameError> {
        match self {
            HighScoreStore::File(path) => fs::read_to_string(path)
                .map_err(|source| GameError::HighScoreIo { path: path.clone(), source }),
            HighScoreStore::Memory(Some(content)) => Ok(content.clone()),
            HighScoreStore::Memory(None) => Err(GameError::HighScoreIo {
                path: self.path(),
                source: io::Error::new(io::ErrorKind::NotFound, "nothing stored yet"),
            }),
        }
    }

    fn write_raw(&mut self, content: &str) -> Result<(), GameError> {
        match self {
            HighScoreStore::File(path) => fs::write(&*path, content)
                .map_err(|source| GameError::HighScoreIo { path: path.clone(), source }),
            HighScoreStore::Memory(stored) => {
                *stored = Some(content.to_string());
                Ok(())
            }
        }
    }

    pub fn load(&self) -> Result<u32, GameError> {
        let content = self.read_raw()?;
        content
            .trim()
            .parse::<u32>()
            .map_err(|_| GameError::HighScoreParse { path: self.path(), content })
    }

    /// Missing or garbled files count as no high score and are replaced by an empty file.
    pub fn load_or_reset(&mut self) -> u32 {
        match self.load() {
            Ok(high_score) => {
                info!("Loaded high score {} from {}", high_score, self.path().display());
                high_score
            }
            Err(e) => {
                warn!("No usable high score ({}). Starting from 0.", e);
                if let Err(e) = self.write_raw("") {
                    warn!("Could not reset high score file: {}", e);
                }
                0
            }
        }
    }

    pub fn save(&mut self, high_score: u32) -> Result<(), GameError> {
        self.write_raw(&high_score.to_string())
    }

    pub fn stored(&self) -> Option<String> {
        match self {
            HighScoreStore::File(path) => fs::read_to_string(path).ok(),
            HighScoreStore::Memory(stored) => stored.clone(),
        }
    }
}

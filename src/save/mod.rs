//! Saving and loading the player.

pub mod json;
pub mod text;

use crate::character::Player;
use clap::ValueEnum;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no save file at {}", .0.display())]
    NotFound(PathBuf),
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("save file is malformed at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("save file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported save version {0}")]
    UnsupportedVersion(u32),
}

/// On-disk layout of the save file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SaveFormat {
    /// Positional plain text, one field group per line.
    #[default]
    Text,
    /// Self-describing JSON document.
    Json,
}

impl SaveFormat {
    pub fn encode(self, player: &Player) -> Result<String, SaveError> {
        match self {
            SaveFormat::Text => Ok(text::encode(player)),
            SaveFormat::Json => json::encode(player),
        }
    }

    pub fn decode(self, contents: &str) -> Result<Player, SaveError> {
        match self {
            SaveFormat::Text => text::decode(contents),
            SaveFormat::Json => json::decode(contents),
        }
    }
}

/// Reads and writes the single save slot.
#[derive(Debug, Clone)]
pub struct SaveManager {
    save_path: PathBuf,
    format: SaveFormat,
}

impl SaveManager {
    pub fn new(save_path: impl Into<PathBuf>, format: SaveFormat) -> Self {
        Self {
            save_path: save_path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Writes the player, replacing any previous save.
    pub fn save(&self, player: &Player) -> Result<(), SaveError> {
        let contents = self.format.encode(player)?;
        fs::write(&self.save_path, contents).inspect_err(|e| {
            warn!(path = %self.save_path.display(), error = %e, "save failed");
        })?;
        info!(path = %self.save_path.display(), format = ?self.format, "game saved");
        Ok(())
    }

    /// Reads a player back. Nothing outside the returned value is touched, so
    /// a failed load leaves the caller's current player as it was.
    pub fn load(&self) -> Result<Player, SaveError> {
        let contents = fs::read_to_string(&self.save_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SaveError::NotFound(self.save_path.clone()),
            _ => SaveError::Io(e),
        })?;
        let player = self.format.decode(&contents).inspect_err(|e| {
            warn!(path = %self.save_path.display(), error = %e, "load failed");
        })?;
        info!(path = %self.save_path.display(), name = %player.name, "game loaded");
        Ok(player)
    }
}

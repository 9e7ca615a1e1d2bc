//! Persistence for profiles and game history
//!
//! Versioned JSON documents under the platform data directory. A missing
//! file loads as an empty store; saves go through an atomic rename so a
//! crash never leaves a half-written document behind.

use super::player::ProfileStore;
use super::session::FinishedGame;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// All recorded games, persisted as a versioned document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameHistory {
    pub version: u32,
    #[serde(default)]
    pub games: Vec<FinishedGame>,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    /// Create a new empty history with the current schema version
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: 1,
            games: Vec::new(),
        }
    }

    /// Append a finished game
    pub fn record(&mut self, game: FinishedGame) {
        self.games.push(game);
    }
}

/// Directory holding the persisted documents
#[must_use]
pub fn store_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("scrabble_scorer")
}

/// Default path of the profiles document
#[must_use]
pub fn profiles_path() -> PathBuf {
    store_dir().join("profiles.json")
}

/// Default path of the game history document
#[must_use]
pub fn history_path() -> PathBuf {
    store_dir().join("history.json")
}

/// Load the profile store from a JSON file
///
/// If the file doesn't exist, returns a new empty store.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed, or if it has an
/// unsupported schema version.
pub fn load_profiles(path: &Path) -> Result<ProfileStore> {
    let Some(store) = load_document::<ProfileStore>(path, "profile store")? else {
        return Ok(ProfileStore::new());
    };

    if store.version != 1 {
        anyhow::bail!("Unsupported profile store version: {}", store.version);
    }

    Ok(store)
}

/// Save the profile store to a JSON file atomically
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the write fails.
pub fn save_profiles(path: &Path, store: &ProfileStore) -> Result<()> {
    save_document(path, store, "profile store")
}

/// Load the game history from a JSON file
///
/// If the file doesn't exist, returns a new empty history.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed, or if it has an
/// unsupported schema version.
pub fn load_history(path: &Path) -> Result<GameHistory> {
    let Some(history) = load_document::<GameHistory>(path, "game history")? else {
        return Ok(GameHistory::new());
    };

    if history.version != 1 {
        anyhow::bail!("Unsupported game history version: {}", history.version);
    }

    Ok(history)
}

/// Save the game history to a JSON file atomically
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the write fails.
pub fn save_history(path: &Path, history: &GameHistory) -> Result<()> {
    save_document(path, history, "game history")
}

fn load_document<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open {what} file at {}", path.display()))?;

    let document = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse {what} file at {}", path.display()))?;

    Ok(Some(document))
}

fn save_document<T: Serialize>(path: &Path, document: &T, what: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, document)
        .with_context(|| format!("Failed to serialize {what}"))?;

    file.commit()
        .with_context(|| format!("Failed to save {what}"))?;

    Ok(())
}

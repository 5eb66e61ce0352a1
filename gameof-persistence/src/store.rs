use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gameof_types::GameSnapshot;
use tracing::{debug, warn};

/// File used when `GAMEOF_STATE_FILE` is not set.
pub const DEFAULT_STATE_FILE: &str = "gameof_state.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single storage slot for the current game.
///
/// There is exactly one game at a time, so the interface is the smallest
/// thing that works: read the slot, overwrite the slot, empty the slot.
/// Loading never fails, a slot that cannot be read plays as empty.
pub trait SnapshotStore {
    /// Reads the saved game, if any usable one exists.
    fn load(&self) -> Option<GameSnapshot>;

    /// Overwrites the slot with the given snapshot.
    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError>;

    /// Empties the slot.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Stores the snapshot as a JSON file on disk.
///
/// Writes go through a sibling temp file and a rename, so a crash mid-write
/// leaves the previous save intact rather than half a file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Builds a store at the path named by `GAMEOF_STATE_FILE`, falling back
    /// to [`DEFAULT_STATE_FILE`] in the working directory.
    pub fn from_env() -> Self {
        let path = std::env::var("GAMEOF_STATE_FILE")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_STATE_FILE.to_string());
        Self::at(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut raw = self.path.clone().into_os_string();
        raw.push(".tmp");
        PathBuf::from(raw)
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Option<GameSnapshot> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "could not read saved game");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring corrupt saved game");
                None
            }
        }
    }

    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        let json = serde_json::to_string(snapshot)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        debug!(path = %self.path.display(), "game saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Keeps the snapshot in memory, serialized the same way the file store
/// writes it. Used in tests and anywhere a throwaway slot is enough.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slot: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Option<GameSnapshot> {
        self.slot
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }

    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        self.slot = Some(serde_json::to_string(snapshot)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.slot = None;
        Ok(())
    }
}

//! Persistent state store - keyed blob storage the engine writes through.
//!
//! Implementations never raise to the caller: a failed read reports the
//! blob as absent and a failed write is logged and swallowed, leaving the
//! engine fully usable in memory.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Internal file-store errors. These never cross the [`StateStore`]
/// contract; the trait impl logs and degrades instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Keyed blob storage for serialized session state.
pub trait StateStore {
    /// Fetch the blob stored under `key`, or `None` if absent or unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `blob` under `key`. Failures are logged and swallowed.
    fn save(&mut self, key: &str, blob: &str);

    /// Discard whatever is stored under `key`.
    fn clear(&mut self, key: &str);
}

/// In-memory store. The production default for embedded hosts and the
/// standard test fake.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, blob: &str) {
        self.entries.insert(key.to_string(), blob.to_string());
    }

    fn clear(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// File-backed store keeping one `<key>.json` file per key under a
/// configured directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), blob)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl StateStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        match self.read(key) {
            Ok(blob) => blob,
            Err(err) => {
                warn!("unable to read companion state '{key}': {err}");
                None
            }
        }
    }

    fn save(&mut self, key: &str, blob: &str) {
        if let Err(err) = self.write(key, blob) {
            warn!("unable to persist companion state '{key}': {err}");
        }
    }

    fn clear(&mut self, key: &str) {
        if let Err(err) = self.remove(key) {
            warn!("unable to clear companion state '{key}': {err}");
        }
    }
}

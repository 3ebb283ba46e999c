//! Key-value session storage.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use thiserror::Error;

/// Session storage errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// File system failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Stored file is not a JSON object of strings
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Lock poisoned
    #[error("Lock poisoned")]
    LockPoisoned,
}

/// String key-value store that survives for the length of a session.
pub trait SessionStorage: Send + Sync {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Storage backed by a JSON object in `<data_dir>/session.json`.
///
/// Every write replaces the file through a synced temporary file and an
/// atomic rename, so readers never observe a partial write.
#[derive(Debug)]
pub struct FileStorage {
    data_dir: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// File name of the session store inside the data directory.
    pub const FILE_NAME: &'static str = "session.json";

    /// Creates a storage rooted at `data_dir`. The directory is created on
    /// first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the path of the session file.
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(Self::FILE_NAME)
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let path = self.path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StorageError::Io(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        serde_json::from_str(&contents).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))?;

        let temp_path = self.data_dir.join(format!("{}.tmp", Self::FILE_NAME));
        write_synced(&temp_path, json.as_bytes())?;

        fs::rename(&temp_path, self.path())
            .map_err(|e| StorageError::Io(format!("Failed to rename session file: {}", e)))
    }

    fn modify(&self, apply: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut entries = self.load()?;
        apply(&mut entries);
        self.save(&entries)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let mut file = File::create(path)
        .map_err(|e| StorageError::Io(format!("Failed to create temp file: {}", e)))?;
    file.write_all(bytes)
        .map_err(|e| StorageError::Io(format!("Failed to write session: {}", e)))?;
    file.sync_all()
        .map_err(|e| StorageError::Io(format!("Failed to sync session: {}", e)))
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if !self.path().exists() {
            return Ok(());
        }
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.get("k").unwrap(), None);
        storage.remove("k").unwrap();
        assert!(!storage.path().exists());

        storage.set("k", "v").unwrap();
        storage.set("other", "x").unwrap();
        assert!(storage.path().exists());
        assert!(!dir.path().join("nested").join("session.json.tmp").exists());

        let reopened = FileStorage::new(dir.path().join("nested"));
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));

        reopened.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
        assert_eq!(storage.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_storage_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        fs::write(storage.path(), "not json").unwrap();
        assert!(matches!(storage.get("k"), Err(StorageError::Serialization(_))));
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable string key/value storage
///
/// Values are opaque strings; callers serialize their own payloads.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct StorageData {
    #[serde(flatten)]
    data: HashMap<String, String>,
}

/// JSON-file backed store; the whole map is rewritten on every write
pub struct FileStore {
    path: PathBuf,
    items: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: PathBuf) -> Self {
        let items = match Self::read_file(&path) {
            Ok(items) => items,
            Err(e) => {
                warn!("Failed to read storage file {:?}: {}. Starting empty.", path, e);
                HashMap::new()
            }
        };
        debug!("Opened storage {:?} ({} keys)", path, items.len());
        Self {
            path,
            items: Mutex::new(items),
        }
    }

    fn read_file(path: &Path) -> Result<HashMap<String, String>, StorageError> {
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(path)?;
        let stored: StorageData = serde_json::from_str(&content)?;
        Ok(stored.data)
    }

    fn write_file(&self, items: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let stored = StorageData { data: items.clone() };
        let content = serde_json::to_string_pretty(&stored)?;

        // Write to a temp file, then rename over the original
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(key).cloned())
    }

    /// On a failed write the previous value is restored, so reads keep matching the file
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        let previous = items.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write_file(&items) {
            match previous {
                Some(previous) => items.insert(key.to_string(), previous),
                None => items.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = items.remove(key) {
            if let Err(e) = self.write_file(&items) {
                items.insert(key.to_string(), previous);
                return Err(e);
            }
        }
        Ok(())
    }
}

/// Process-local store, nothing survives a restart
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_set_and_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let store = FileStore::open(path.clone());
        store.set_item("cinescope_watchlist", "[]").unwrap();
        store.set_item("other", "value").unwrap();

        let reopened = FileStore::open(path);
        assert_eq!(reopened.get_item("cinescope_watchlist").unwrap(), Some("[]".to_string()));
        assert_eq!(reopened.get_item("other").unwrap(), Some("value".to_string()));
        assert_eq!(reopened.get_item("missing").unwrap(), None);
    }

    #[test]
    fn test_file_store_remove() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let store = FileStore::open(path.clone());
        store.set_item("key1", "value1").unwrap();
        store.set_item("key2", "value2").unwrap();
        store.remove_item("key1").unwrap();

        let reopened = FileStore::open(path);
        assert_eq!(reopened.get_item("key1").unwrap(), None);
        assert_eq!(reopened.get_item("key2").unwrap(), Some("value2".to_string()));
    }

    #[test]
    fn test_file_store_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileStore::open(path);
        assert_eq!(store.get_item("cinescope_watchlist").unwrap(), None);
        store.set_item("cinescope_watchlist", "[]").unwrap();
        assert_eq!(store.get_item("cinescope_watchlist").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_file_store_failed_set_keeps_previous_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let store = FileStore::open(path.clone());
        store.set_item("key", "old").unwrap();

        // A directory where the temp file should go makes the next write fail
        std::fs::create_dir(path.with_extension("tmp")).unwrap();

        assert!(store.set_item("key", "new").is_err());
        assert!(store.set_item("fresh", "value").is_err());
        assert_eq!(store.get_item("key").unwrap(), Some("old".to_string()));
        assert_eq!(store.get_item("fresh").unwrap(), None);

        let reopened = FileStore::open(path);
        assert_eq!(reopened.get_item("key").unwrap(), Some("old".to_string()));
    }

    #[test]
    fn test_file_store_failed_remove_keeps_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let store = FileStore::open(path.clone());
        store.set_item("key", "value").unwrap();
        std::fs::create_dir(path.with_extension("tmp")).unwrap();

        assert!(store.remove_item("key").is_err());
        assert_eq!(store.get_item("key").unwrap(), Some("value".to_string()));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        store.set_item("key", "value").unwrap();
        assert_eq!(store.get_item("key").unwrap(), Some("value".to_string()));
        store.remove_item("key").unwrap();
        assert_eq!(store.get_item("key").unwrap(), None);
    }
}

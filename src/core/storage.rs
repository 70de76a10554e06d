use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::{StorageError, StorageResult};

// ── Key-Value Storage ────────────────────────────────────────────────────────
//
// A tiny string→string store with local-storage semantics.  The content
// store only ever keeps the admin session flag here.

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    /// Removing a key that is not present succeeds.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

type StorageMap = HashMap<String, String>;

/// JSON object on disk.  Every call re-reads the file so that edits made by
/// another instance of the app are picked up.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> StorageResult<StorageMap> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding unreadable storage file");
                Ok(HashMap::new())
            }
        }
    }

    fn write_map(&self, map: &StorageMap) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }
        let raw = serde_json::to_string_pretty(map).map_err(|e| StorageError::json(&self.path, e))?;
        fs::write(&self.path, raw).map_err(|e| StorageError::io(&self.path, e))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// In-process storage.  Clones share the same map, so a clone handed to a
/// second store behaves like the same storage seen after a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    map: Arc<Mutex<StorageMap>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StorageMap> {
        // A panic while holding the lock cannot leave the map half-written.
        self.map.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get("admin-auth").unwrap(), None);
    }

    #[test]
    fn test_file_storage_set_get_remove() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let mut storage = FileStorage::new(&path);

        storage.set("admin-auth", "true").unwrap();
        storage.set("other", "x").unwrap();
        assert!(path.exists());

        // A fresh handle on the same file sees the value.
        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("admin-auth").unwrap().as_deref(), Some("true"));

        storage.remove("admin-auth").unwrap();
        assert_eq!(reopened.get("admin-auth").unwrap(), None);
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_storage_remove_absent_key_is_ok() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let mut storage = FileStorage::new(&path);
        storage.remove("admin-auth").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_file_storage_corrupt_file_reads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{ not json").unwrap();

        let mut storage = FileStorage::new(&path);
        assert_eq!(storage.get("admin-auth").unwrap(), None);

        // Writing replaces the corrupt content.
        storage.set("admin-auth", "true").unwrap();
        assert_eq!(storage.get("admin-auth").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_memory_storage_clones_share_state() {
        let mut a = MemoryStorage::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
        a.remove("k").unwrap();
        assert_eq!(b.get("k").unwrap(), None);
    }
}

//! Storage collaborators.
//!
//! The store only needs to read and write one text value under one key. How
//! that value is kept is up to the [`Storage`] implementation.

use crate::error::{KanbanError, Result};
use fs2::FileExt;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key-value text storage for board snapshots
pub trait Storage {
    /// Read the value under `key`, `None` if nothing was saved yet
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}

/// In-process storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        storage
    }

    /// Current value under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn lock_entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| KanbanError::storage("memory storage lock poisoned"))
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock_entries()?.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.lock_entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: each key is a `{key}.json` file under `root`.
///
/// Writes go through a temp file and a rename, under an exclusive lock on
/// `{root}/.lock`, so a reader never sees a half-written snapshot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Path to the lock file
    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    /// Take the exclusive write lock without blocking
    pub fn lock(&self) -> Result<StorageLock> {
        fs::create_dir_all(&self.root)?;

        let file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.lock_path())?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(StorageLock { file }),
            Err(_) => Err(KanbanError::LockBusy),
        }
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let _lock = self.lock()?;
        atomic_write(&self.entry_path(key), value.as_bytes())
    }
}

/// RAII lock guard - releases on drop
pub struct StorageLock {
    file: fs::File,
}

impl Drop for StorageLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load("k").unwrap(), None);

        storage.save("k", "v1").unwrap();
        storage.save("k", "v2").unwrap();
        assert_eq!(storage.load("k").unwrap(), Some("v2".to_string()));
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::with_entry("k", "v");
        let handle = storage.clone();
        handle.save("other", "x").unwrap();
        assert_eq!(storage.get("other"), Some("x".to_string()));
        assert_eq!(handle.get("k"), Some("v".to_string()));
    }

    #[test]
    fn test_file_storage_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("board"));
        assert_eq!(storage.load("kanban-board-state").unwrap(), None);
    }

    #[test]
    fn test_file_storage_creates_root_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("nested").join("board"));

        storage.save("state", "{\"columns\":[]}").unwrap();
        storage.save("state", "second").unwrap();

        assert!(storage.entry_path("state").exists());
        assert!(!storage.entry_path("state").with_extension("tmp").exists());
        assert_eq!(storage.load("state").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_file_storage_locking() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());

        let lock = storage.lock().unwrap();
        assert!(matches!(storage.lock(), Err(KanbanError::LockBusy)));
        assert!(matches!(storage.save("k", "v"), Err(KanbanError::LockBusy)));

        drop(lock);
        storage.save("k", "v").unwrap();
    }
}

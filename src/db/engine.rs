//! Key-value storage engines

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, error};

use crate::error::Result;

/// String-valued key-value store scoped to one user profile
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, lost when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, useful for fixtures
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// Every write rewrites the whole file through a temporary file in the same
/// directory, so a crash never leaves a half-written document behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store, starting empty when the file is missing or unreadable
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    error!("Storage file {:?} is not a JSON object, starting empty: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            debug!("Storage file {:?} does not exist yet", path);
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        let content = serde_json::to_string_pretty(entries)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    /// The new value is only visible once it is on disk
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)?;
        self.entries = entries;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new().with("a", "1");
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap(), None);
        store.set("b", "2").unwrap();
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("karaoke.contrast").unwrap(), None);
        store.set("karaoke.contrast", "high").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("karaoke.contrast").unwrap().as_deref(), Some("high"));
    }

    #[test]
    fn test_file_store_recovers_from_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(FileStore::open(&path).unwrap().get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("karaoke.contrast", "normal").unwrap();

        // a directory in place of the file makes the rename fail
        fs::remove_file(&path).unwrap();
        fs::create_dir_all(path.join("x")).unwrap();

        assert!(store.set("karaoke.contrast", "high").is_err());
        assert!(store.set("karaoke.songs", "[]").is_err());
        assert_eq!(store.get("karaoke.contrast").unwrap().as_deref(), Some("normal"));
        assert_eq!(store.get("karaoke.songs").unwrap(), None);
    }
}

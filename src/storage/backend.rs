use crate::error::{MemosError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::NamedTempFile;

/// Key/value blob storage. A key holds one serialized value that is replaced whole.
pub trait StorageBackend {
    /// Returns `Ok(None)` when nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<key>.json` inside a data directory.
pub struct JsonFileBackend {
    data_path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    pub fn file_path(&self, key: &str) -> PathBuf {
        self.data_path.join(format!("{}.json", key))
    }

    /// Write to a temp file in the target directory, then rename over the target.
    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        let target_dir = target_path.parent().ok_or_else(|| {
            MemosError::Persistence("Target path has no parent directory".to_string())
        })?;

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| MemosError::Persistence(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| MemosError::Persistence(format!("Failed to write temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| MemosError::Persistence(format!("Failed to sync temp file: {}", e)))?;

        temp_file.persist(target_path).map_err(|e| {
            MemosError::Persistence(format!(
                "Failed to move temp file into {}: {}",
                target_path.display(),
                e.error
            ))
        })?;

        Ok(())
    }
}

impl StorageBackend for JsonFileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.file_path(key);
        if !file_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&file_path)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.data_path)?;
        self.atomic_write(&self.file_path(key), value)
    }
}

/// In-process storage. Clones share the same underlying map, so a test can keep
/// a handle while the store owns another.
#[derive(Clone)]
pub struct MemoryBackend {
    blobs: Rc<RefCell<HashMap<String, String>>>,
    available: Rc<Cell<bool>>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self {
            blobs: Rc::default(),
            available: Rc::new(Cell::new(true)),
        }
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate storage going away (quota exceeded, disabled storage).
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    pub fn put_raw(&self, key: &str, value: &str) {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn check_available(&self) -> Result<()> {
        if self.available.get() {
            Ok(())
        } else {
            Err(MemosError::Persistence("Storage unavailable".to_string()))
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.check_available()?;
        self.put_raw(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_backend_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(temp_dir.path());
        assert!(backend.read("memos").unwrap().is_none());
    }

    #[test]
    fn test_file_backend_creates_directory_and_replaces() {
        let temp_dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(temp_dir.path().join("data"));

        backend.write("memos", "[1]").unwrap();
        backend.write("memos", "[2]").unwrap();

        assert_eq!(backend.read("memos").unwrap().as_deref(), Some("[2]"));
        assert!(temp_dir.path().join("data/memos.json").exists());
    }

    #[test]
    fn test_memory_backend_shares_state_between_clones() {
        let backend = MemoryBackend::new();
        let handle = backend.clone();
        backend.write("memos", "[]").unwrap();
        assert_eq!(handle.raw("memos").as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_backend_unavailable() {
        let backend = MemoryBackend::new();
        backend.set_available(false);
        assert!(matches!(
            backend.write("memos", "[]"),
            Err(MemosError::Persistence(_))
        ));
        assert!(backend.read("memos").is_err());
    }
}

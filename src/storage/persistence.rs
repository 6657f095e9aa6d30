use super::backend::StorageBackend;
use crate::error::{MemosError, Result};
use crate::model::Memo;

/// Moves the whole memo collection to and from a [`StorageBackend`].
///
/// Failures never reach the caller as errors: a bad or missing blob loads as
/// an empty collection and a failed save is logged and reported as `false`.
pub struct Persistence<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn load(&self) -> Vec<Memo> {
        match self.try_load() {
            Ok(memos) => {
                tracing::debug!(key = %self.key, count = memos.len(), "Loaded memos");
                memos
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to load memos, starting empty");
                Vec::new()
            }
        }
    }

    /// Returns whether the collection reached storage.
    pub fn save(&self, memos: &[Memo]) -> bool {
        match self.try_save(memos) {
            Ok(()) => {
                tracing::debug!(key = %self.key, count = memos.len(), "Saved memos");
                true
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to save memos");
                false
            }
        }
    }

    fn try_load(&self) -> Result<Vec<Memo>> {
        let Some(raw) = self.backend.read(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw)
            .map_err(|e| MemosError::Persistence(format!("Corrupt memo data: {}", e)))
    }

    fn try_save(&self, memos: &[Memo]) -> Result<()> {
        let raw = serde_json::to_string_pretty(memos)?;
        self.backend.write(&self.key, &raw)
    }
}

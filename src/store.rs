//! The memo store: owner of the canonical memo collection.
//!
//! Every successful mutation is written through to persistence exactly once.
//! A failed write is logged and does not roll back the in-memory change.

use crate::error::{MemosError, Result};
use crate::model::{Category, CategoryFilter, Memo, MemoFormData};
use crate::search::ViewFilter;
use crate::storage::{Persistence, StorageBackend};
use crate::validation;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const DEFAULT_ID_LENGTH: usize = 8;

/// Aggregate counts over the live collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoStats {
    pub total: usize,
    /// Every known category is present (possibly zero). Unrecognized category
    /// strings get their own entry.
    pub by_category: BTreeMap<String, usize>,
}

impl MemoStats {
    pub fn count(&self, category: &Category) -> usize {
        self.by_category
            .get(category.as_str())
            .copied()
            .unwrap_or(0)
    }
}

pub struct MemoStore<B: StorageBackend> {
    persistence: Persistence<B>,
    memos: Vec<Memo>,
    loading: bool,
    initialized: bool,
    last_save_ok: bool,
    id_length: usize,
}

impl<B: StorageBackend> MemoStore<B> {
    pub fn new(persistence: Persistence<B>) -> Self {
        Self {
            persistence,
            memos: Vec::new(),
            loading: false,
            initialized: false,
            last_save_ok: true,
            id_length: DEFAULT_ID_LENGTH,
        }
    }

    pub fn with_id_length(mut self, id_length: usize) -> Self {
        self.id_length = id_length.max(1);
        self
    }

    /// Load the persisted collection. Only the first call does anything.
    pub fn initialize(&mut self) {
        if self.initialized {
            tracing::debug!("Memo store already initialized");
            return;
        }
        self.loading = true;
        self.memos = self.persistence.load();
        self.loading = false;
        self.initialized = true;
        tracing::debug!(count = self.memos.len(), "Memo store initialized");
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the most recent write reached storage.
    pub fn last_save_failed(&self) -> bool {
        !self.last_save_ok
    }

    /// The collection in insertion order.
    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    pub fn len(&self) -> usize {
        self.memos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memos.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&Memo> {
        self.memos
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| MemosError::NotFound(id.to_string()))
    }

    /// The collection ordered most-recently-updated first, ties broken by id.
    pub fn sorted(&self) -> Vec<Memo> {
        let mut memos = self.memos.clone();
        memos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
        memos
    }

    /// Display order first, then filtering.
    pub fn view(&self, search_query: &str, category: CategoryFilter) -> Vec<Memo> {
        ViewFilter::new(search_query, category).apply(&self.sorted())
    }

    pub fn create(&mut self, form: MemoFormData) -> Result<Memo> {
        let form = validation::normalize_form(form)?;
        let now = Utc::now();
        let id = self.generate_id(now);

        tracing::info!(id = %id, title = %form.title, "Creating memo");

        let memo = Memo::new(id, form, now);
        self.memos.push(memo.clone());
        self.persist();
        Ok(memo)
    }

    pub fn update(&mut self, id: &str, form: MemoFormData) -> Result<Memo> {
        let pos = self.position(id)?;
        let form = validation::normalize_form(form)?;

        tracing::info!(id = %id, title = %form.title, "Updating memo");

        let memo = &mut self.memos[pos];
        memo.apply(form, Utc::now());
        let updated = memo.clone();
        self.persist();
        Ok(updated)
    }

    /// Fails with `NotFound` when `id` is absent, rather than silently succeeding.
    pub fn delete(&mut self, id: &str) -> Result<Memo> {
        let pos = self.position(id)?;

        tracing::info!(id = %id, "Deleting memo");

        let removed = self.memos.remove(pos);
        self.persist();
        Ok(removed)
    }

    pub fn stats(&self) -> MemoStats {
        let mut by_category: BTreeMap<String, usize> = Category::KNOWN
            .iter()
            .map(|c| (c.as_str().to_string(), 0))
            .collect();
        for memo in &self.memos {
            *by_category
                .entry(memo.category.as_str().to_string())
                .or_default() += 1;
        }
        MemoStats {
            total: self.memos.len(),
            by_category,
        }
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.memos
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| MemosError::NotFound(id.to_string()))
    }

    fn persist(&mut self) {
        self.last_save_ok = self.persistence.save(&self.memos);
    }

    /// Base36 millisecond timestamp plus a random suffix, retried until unused.
    fn generate_id(&self, now: DateTime<Utc>) -> String {
        let stamp = to_base36(now.timestamp_millis().max(0) as u64);
        loop {
            let suffix = nanoid::format(nanoid::rngs::default, &ID_ALPHABET, self.id_length);
            let id = format!("{}-{}", stamp, suffix);
            if !self.memos.iter().any(|m| m.id == id) {
                return id;
            }
        }
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ID_ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use std::collections::HashSet;

    fn store() -> (MemoStore<MemoryBackend>, MemoryBackend) {
        let backend = MemoryBackend::new();
        let mut store = MemoStore::new(Persistence::new(backend.clone(), "memos"));
        store.initialize();
        (store, backend)
    }

    fn persisted(backend: &MemoryBackend) -> Vec<Memo> {
        Persistence::new(backend.clone(), "memos").load()
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn test_create_stamps_id_and_timestamps() {
        let (mut store, backend) = store();
        let memo = store.create(MemoFormData::new("Groceries")).unwrap();

        assert!(!memo.id.is_empty());
        assert_eq!(memo.created_at, memo.updated_at);
        assert_eq!(persisted(&backend), vec![memo]);
    }

    #[test]
    fn test_create_generates_unique_ids() {
        let (mut store, _) = store();
        let ids: HashSet<String> = (0..200)
            .map(|i| store.create(MemoFormData::new(format!("memo {}", i))).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let (mut store, backend) = store();
        let result = store.create(MemoFormData::new("   "));
        assert!(matches!(result, Err(MemosError::Validation(_))));
        assert!(store.is_empty());
        assert!(backend.raw("memos").is_none());
    }

    #[test]
    fn test_update_keeps_identity() {
        let (mut store, backend) = store();
        let original = store.create(MemoFormData::new("Draft")).unwrap();

        let updated = store
            .update(
                &original.id,
                MemoFormData::new("Final")
                    .with_content("body")
                    .with_category("study")
                    .with_tags(vec!["exam".to_string()]),
            )
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(updated.category, Category::Study);
        assert_eq!(store.get(&original.id).unwrap(), &updated);
        assert_eq!(persisted(&backend), vec![updated]);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let (mut store, _) = store();
        store.create(MemoFormData::new("Keep")).unwrap();
        let before = store.memos().to_vec();

        let result = store.update("nonexistent-id", MemoFormData::new("x"));
        assert!(matches!(result, Err(MemosError::NotFound(_))));
        assert_eq!(store.memos(), before.as_slice());
    }

    #[test]
    fn test_update_rejects_blank_title_without_change() {
        let (mut store, _) = store();
        let memo = store.create(MemoFormData::new("Keep")).unwrap();
        let result = store.update(&memo.id, MemoFormData::new(""));
        assert!(matches!(result, Err(MemosError::Validation(_))));
        assert_eq!(store.get(&memo.id).unwrap().title, "Keep");
    }

    #[test]
    fn test_delete_removes_from_memory_and_storage() {
        let (mut store, backend) = store();
        let a = store.create(MemoFormData::new("A")).unwrap();
        let b = store.create(MemoFormData::new("B")).unwrap();

        store.delete(&a.id).unwrap();

        assert!(store.get(&a.id).is_err());
        assert!(store.view("", CategoryFilter::All).iter().all(|m| m.id != a.id));
        assert_eq!(persisted(&backend), vec![b]);
        assert!(matches!(store.delete(&a.id), Err(MemosError::NotFound(_))));
    }

    #[test]
    fn test_stats_counts_categories() {
        let (mut store, _) = store();
        store
            .create(
                MemoFormData::new("Groceries")
                    .with_content("milk, eggs")
                    .with_category("personal")
                    .with_tags(vec!["home".to_string()]),
            )
            .unwrap();
        store
            .create(MemoFormData::new("Mystery").with_category("journal"))
            .unwrap();

        let stats = store.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.count(&Category::Personal), 1);
        assert_eq!(stats.count(&Category::Work), 0);
        assert_eq!(stats.by_category.get("journal"), Some(&1));
        assert_eq!(stats.by_category.get("idea"), Some(&0));
    }

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let (mut store, backend) = store();
        backend.set_available(false);

        let memo = store.create(MemoFormData::new("Offline")).unwrap();

        assert!(store.last_save_failed());
        assert_eq!(store.get(&memo.id).unwrap().title, "Offline");

        backend.set_available(true);
        store.create(MemoFormData::new("Online")).unwrap();
        assert!(!store.last_save_failed());
        assert_eq!(persisted(&backend).len(), 2);
    }

    #[test]
    fn test_initialize_runs_once() {
        let backend = MemoryBackend::new();
        let mut store = MemoStore::new(Persistence::new(backend.clone(), "memos"));
        assert!(!store.is_initialized());
        store.initialize();
        store.create(MemoFormData::new("Kept")).unwrap();

        backend.put_raw("memos", "[]");
        store.initialize();

        assert!(store.is_initialized());
        assert!(!store.is_loading());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sorted_is_most_recently_updated_first() {
        let (mut store, _) = store();
        let first = store.create(MemoFormData::new("first")).unwrap();
        let second = store.create(MemoFormData::new("second")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        store.update(&first.id, MemoFormData::new("first again")).unwrap();

        let order: Vec<String> = store.sorted().into_iter().map(|m| m.id).collect();
        assert_eq!(order, vec![first.id.clone(), second.id]);
        assert_eq!(store.memos()[0].id, first.id);
    }
}

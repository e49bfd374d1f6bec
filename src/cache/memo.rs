use std::collections::HashMap;

use parking_lot::RwLock;

// Unbounded memo map, entries live until `clear`
pub struct MemoCache<T> {
    entries: RwLock<HashMap<String, T>>,
}

impl<T: Clone> MemoCache<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.read();
        entries.get(key).cloned()
    }

    pub fn insert(&self, key: impl Into<String>, value: T) {
        let mut entries = self.entries.write();
        entries.insert(key.into(), value);
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Drops every entry whose key starts with `prefix`, returning how many went.
    pub fn remove_prefixed(&self, prefix: &str) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<T: Clone> Default for MemoCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

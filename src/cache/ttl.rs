use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use super::Clock;

#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub data: T,
    pub inserted_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl<T: Clone> CacheEntry<T> {
    pub fn new(data: T, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            data,
            inserted_at: now,
            expires_at: now + ttl,
        }
    }

    /// An entry is fresh strictly before its expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.inserted_at
    }
}

/// Time-bounded memoization keyed by string. Expired entries are left in
/// place until overwritten or removed; there is no size bound.
pub struct TtlCache<T> {
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    clock: Arc<dyn Clock>,
    pub ttl: Duration,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<T> {
        let now = self.clock.now();
        let entries = self.entries.read();

        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => Some(entry.data.clone()),
            _ => None,
        }
    }

    /// Age of a fresh entry, `None` if missing or expired.
    pub fn age(&self, key: &str) -> Option<Duration> {
        let now = self.clock.now();
        let entries = self.entries.read();

        entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.age(now))
    }

    pub fn insert(&self, key: impl Into<String>, data: T) {
        let entry = CacheEntry::new(data, self.clock.now(), self.ttl);
        self.entries.write().insert(key.into(), entry);
    }

    pub fn remove(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

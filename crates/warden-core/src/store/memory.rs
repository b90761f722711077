//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use glob::Pattern;
use parking_lot::RwLock;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::store::KeyValueStore;

#[derive(Debug, Clone)]
struct StoredEntry {
    value: String,
    /// `None` means the key never expires.
    expires_at: Option<Instant>,
}

impl StoredEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

/// In-process [`KeyValueStore`] with glob scans and lazy TTL expiry.
///
/// Used by tests and single-node deployments; multi-node deployments plug a
/// shared backend behind the same trait. Expired entries stay in the map
/// until a read or scan touches them.
pub struct MemoryStore {
    entries: RwLock<HashMap<String, StoredEntry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    /// Creates an empty store driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store with an injected clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Number of physically held entries, expired included.
    pub fn entry_count(&self) -> usize {
        self.entries.read().len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let pattern = match Pattern::new(pattern) {
            Ok(p) => p,
            Err(e) => {
                debug!(pattern = %pattern, error = %e, "Invalid glob pattern");
                return Ok(Vec::new());
            }
        };

        let now = self.clock.now();
        let keys = self
            .entries
            .read()
            .iter()
            .filter(|(_, entry)| !entry.is_expired(now))
            .filter(|(key, _)| pattern.matches(key))
            .map(|(key, _)| key.clone())
            .collect();

        Ok(keys)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = self.clock.now();

        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => {
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => {} // expired, reap below
                None => return Ok(None),
            }
        }

        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|e| e.is_expired(now)) {
            entries.remove(key);
        }

        Ok(None)
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), StoreError> {
        let expires_at = ttl.map(|d| self.clock.now() + d);
        self.entries.write().insert(
            key.to_string(),
            StoredEntry {
                value: value.to_string(),
                expires_at,
            },
        );

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let now = self.clock.now();
        let removed = self.entries.write().remove(key);

        // A key that was already expired counts as absent.
        Ok(removed.is_some_and(|entry| !entry.is_expired(now)))
    }

    async fn set_ttl(&self, key: &str, ttl: Option<Duration>) -> Result<bool, StoreError> {
        let now = self.clock.now();
        let mut entries = self.entries.write();

        match entries.get_mut(key) {
            Some(entry) if !entry.is_expired(now) => {
                entry.expires_at = ttl.map(|d| now + d);
                Ok(true)
            }
            Some(_) => {
                entries.remove(key);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "memory"
    }
}

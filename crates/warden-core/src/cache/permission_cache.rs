//! In-process role → permission cache with TTL expiry and hit/miss counters.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::permissions::PermissionSet;

/// A cached resolution with its expiry deadline.
#[derive(Debug, Clone)]
struct CacheEntry {
    permissions: PermissionSet,
    expires_at: Instant,
    created_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Snapshot of cache telemetry.
///
/// `hits` and `misses` are process-lifetime counters, reset only by
/// [`PermissionCache::invalidate_all`] so that the hit rate always reads
/// "since the last full reset". `hit_rate` is a percentage rounded to two
/// decimal places; `size` counts entries that are unexpired at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub size: usize,
}

/// Thread-safe cache from role identifier to resolved permission set.
///
/// An explicitly constructed instance: create one at startup and hand it to
/// every consumer by `Arc`. Reads take the read lock and do not block other
/// reads; mutation is serialized by the write lock; the counters are atomics.
///
/// Expired entries are treated as absent on lookup and are evicted lazily as
/// a side effect of the read that finds them stale.
pub struct PermissionCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
    clock: Arc<dyn Clock>,
}

impl PermissionCache {
    /// Creates a cache driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a cache with an injected clock (deterministic expiry in tests).
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            clock,
        }
    }

    /// Returns the cached permissions for a role if present and unexpired.
    ///
    /// A present-and-unexpired result counts as a hit; anything else counts
    /// as a miss, including an entry that exists but has expired. The stale
    /// entry is removed as a side effect of such a read.
    pub fn get(&self, role_id: &str) -> Option<PermissionSet> {
        let now = self.clock.now();

        {
            let entries = self.entries.read();
            match entries.get(role_id) {
                Some(entry) if !entry.is_expired(now) => {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    return Some(entry.permissions.clone());
                }
                Some(_) => {} // expired, fall through to evict
                None => {
                    self.misses.fetch_add(1, Ordering::Relaxed);
                    return None;
                }
            }
        }

        // The entry was expired under the read lock. Re-check under the
        // write lock: another writer may have replaced it in between.
        let mut entries = self.entries.write();
        if let Some(entry) = entries.get(role_id) {
            if entry.is_expired(now) {
                debug!(
                    role = %role_id,
                    age_secs = (now - entry.created_at).as_secs(),
                    "evicting expired entry on read"
                );
                entries.remove(role_id);
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Inserts or replaces the entry for a role.
    ///
    /// Overwriting an existing entry does not affect the hit/miss counters.
    pub fn set(&self, role_id: impl Into<String>, permissions: PermissionSet, ttl: Duration) {
        let now = self.clock.now();
        let entry = CacheEntry {
            permissions,
            expires_at: now + ttl,
            created_at: now,
        };

        self.entries.write().insert(role_id.into(), entry);
    }

    /// Removes the entry for a role if present.
    ///
    /// A no-op (not an error) when the role is absent. Never touches the
    /// hit/miss counters. Returns true if an entry was removed.
    pub fn invalidate(&self, role_id: &str) -> bool {
        self.entries.write().remove(role_id).is_some()
    }

    /// Clears all entries and resets the hit/miss counters to zero.
    ///
    /// This is the only operation that resets the counters, so hit-rate
    /// telemetry always measures behaviour since the last full reset.
    /// Returns the number of entries cleared.
    pub fn invalidate_all(&self) -> usize {
        let mut entries = self.entries.write();
        let cleared = entries.len();
        entries.clear();

        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);

        cleared
    }

    /// Returns the role ids currently held (unexpired), sorted.
    ///
    /// Administrative inspection only: does not mutate the counters.
    pub fn cached_role_ids(&self) -> Vec<String> {
        let now = self.clock.now();
        let mut ids: Vec<String> = self
            .entries
            .read()
            .iter()
            .filter(|(_, entry)| !entry.is_expired(now))
            .map(|(role, _)| role.clone())
            .collect();

        ids.sort();
        ids
    }

    /// Returns a telemetry snapshot. Pure read, no side effects.
    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now();
        let size = self
            .entries
            .read()
            .values()
            .filter(|entry| !entry.is_expired(now))
            .count();

        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);

        CacheStats {
            hits,
            misses,
            hit_rate: hit_rate(hits, misses),
            size,
        }
    }
}

impl Default for PermissionCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Hit rate as a percentage, rounded to two decimal places.
/// Defined as 0 when no reads have happened yet.
fn hit_rate(hits: u64, misses: u64) -> f64 {
    let total = hits + misses;
    if total == 0 {
        return 0.0;
    }

    let rate = hits as f64 / total as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

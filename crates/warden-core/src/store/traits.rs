//! Key-value store trait definition.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;

/// A shared key-value store reachable by key-pattern query.
///
/// This trait abstracts over the store backend (in-memory, Redis, etc.) so
/// that the pattern-admin operator can run against whatever the deployment
/// uses without knowing the wire protocol. Keys are arbitrary strings; values
/// are opaque serialized blobs.
///
/// # Implementors
///
/// - `MemoryStore` - In-process store for tests and single-node deployments
/// - (Future) `RedisStore` - Shared store for multi-node deployments
///
/// # Example
///
/// ```ignore
/// use warden_core::store::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set("perm:role-1", "{\"permissions\":[\"read\"]}", None).await?;
/// let keys = store.scan_keys("perm:*").await?;
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns all keys matching a glob pattern (`*` any sequence, `?` one
    /// character), case-sensitive over the full key string.
    ///
    /// Expired keys are not reported. Order is unspecified; callers that
    /// need determinism must sort.
    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>, StoreError>;

    /// Returns the value for a key, or `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Inserts or replaces a key. `ttl = None` means the key never expires.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>)
    -> Result<(), StoreError>;

    /// Deletes a key. Returns true if a live key was removed.
    ///
    /// Deleting an absent key is a no-op, which makes bulk purges safe to
    /// re-run.
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;

    /// Rewrites the expiry of an existing key without touching its value.
    /// `ttl = None` removes the expiry. Returns true if the key existed.
    async fn set_ttl(&self, key: &str, ttl: Option<Duration>) -> Result<bool, StoreError>;

    /// Short backend name for logs.
    fn name(&self) -> &str;
}

//! # Warden Core
//!
//! Authorization cache and administrative control plane for Warden.
//!
//! This crate provides the domain layer: an in-process role → permission
//! cache with TTL expiry and hit/miss telemetry, advisory health
//! classification over that telemetry, a key-value store abstraction, and a
//! pattern-scoped administrative operator that gates bulk mutations behind a
//! preview → confirm protocol.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use warden_core::admin::{AdminOperation, PatternAdminOperator};
//! use warden_core::cache::PermissionCache;
//! use warden_core::permissions::PermissionSet;
//! use warden_core::store::{KeyValueStore, MemoryStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = PermissionCache::new();
//! let permissions: PermissionSet = ["work-items:read"].into_iter().collect();
//! cache.set("role-1", permissions, Duration::from_secs(300));
//! assert!(cache.get("role-1").is_some());
//!
//! let store = Arc::new(MemoryStore::new());
//! store.set("perm:role-1", "{}", None).await?;
//!
//! let operator = PatternAdminOperator::with_defaults(store);
//! let preview = operator.preview("perm:*").await?;
//! assert_eq!(preview.matched_count, 1);
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod cache;
pub mod clock;
pub mod error;
pub mod permissions;
pub mod store;
pub mod trace;

// Re-exports
pub use admin::{AdminOperation, ConfirmOutcome, PatternAdminOperator, PreviewResult};
pub use cache::{CacheHealthMonitor, CacheStats, HealthWarning, PermissionCache};
pub use error::{AdminError, StoreError};
pub use permissions::PermissionSet;
pub use store::{KeyValueStore, MemoryStore};
pub use trace::{CorrelationTracer, LogQuery, RequestIdTracer};

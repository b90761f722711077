//! Permission cache for Warden.
//!
//! This module provides the in-process role → permission cache with
//! TTL-based expiration, hit/miss telemetry, and advisory health
//! classification over that telemetry.

pub mod health;
pub mod permission_cache;

// Re-exports
pub use health::{CacheHealthMonitor, HealthThresholds, HealthWarning};
pub use permission_cache::{CacheStats, PermissionCache};

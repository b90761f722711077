//! Application state.

use std::sync::Arc;

use warden_core::admin::PatternAdminOperator;
use warden_core::cache::{CacheHealthMonitor, PermissionCache};
use warden_core::store::KeyValueStore;
use warden_core::trace::{CorrelationTracer, RequestIdTracer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The permission cache instance (constructed once at startup).
    cache: Arc<PermissionCache>,
    /// The shared key-value store the admin operator runs against.
    store: Arc<dyn KeyValueStore>,
    /// Pattern-scoped admin operator.
    operator: Arc<PatternAdminOperator>,
    /// Health classifier over cache telemetry.
    monitor: Arc<CacheHealthMonitor>,
    /// Builds log-search descriptors for correlation ids.
    tracer: Arc<dyn CorrelationTracer>,
}

impl AppState {
    /// Creates a new AppState with the given components.
    pub fn new(
        cache: Arc<PermissionCache>,
        store: Arc<dyn KeyValueStore>,
        operator: Arc<PatternAdminOperator>,
        monitor: Arc<CacheHealthMonitor>,
    ) -> Self {
        Self {
            cache,
            store,
            operator,
            monitor,
            tracer: Arc::new(RequestIdTracer),
        }
    }

    /// Returns a reference to the permission cache.
    pub fn cache(&self) -> &PermissionCache {
        self.cache.as_ref()
    }

    /// Returns a reference to the key-value store.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Returns a reference to the admin operator.
    pub fn operator(&self) -> &PatternAdminOperator {
        self.operator.as_ref()
    }

    /// Returns a reference to the health monitor.
    pub fn monitor(&self) -> &CacheHealthMonitor {
        self.monitor.as_ref()
    }

    /// Returns a reference to the correlation tracer.
    pub fn tracer(&self) -> &dyn CorrelationTracer {
        self.tracer.as_ref()
    }
}

//! Test helpers para warden-server.

#![allow(dead_code, unused_imports)]

pub mod client;

pub use client::{TestClient, TestResponse, client};

use std::sync::Arc;

use warden_core::admin::PatternAdminOperator;
use warden_core::cache::{CacheHealthMonitor, PermissionCache};
use warden_core::clock::ManualClock;
use warden_core::store::MemoryStore;
use warden_server::{AppState, create_router_with_state};

/// App completa con cache, store y clock compartidos para manipular el
/// estado desde los tests.
pub struct TestApp {
    pub client: TestClient,
    pub cache: Arc<PermissionCache>,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<ManualClock>,
}

/// Crea una app de test con clock manual y store en memoria.
pub fn test_app() -> TestApp {
    let clock = Arc::new(ManualClock::new());
    let cache = Arc::new(PermissionCache::with_clock(clock.clone()));
    let store = Arc::new(MemoryStore::with_clock(clock.clone()));
    let operator = Arc::new(PatternAdminOperator::with_defaults(store.clone()));
    let monitor = Arc::new(CacheHealthMonitor::with_defaults());

    let state = AppState::new(cache.clone(), store.clone(), operator, monitor);

    TestApp {
        client: TestClient::new(create_router_with_state(state)),
        cache,
        store,
        clock,
    }
}

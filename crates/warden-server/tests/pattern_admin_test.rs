//! Tests del protocolo preview → confirm sobre el store compartido.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use helpers::{TestApp, TestClient, test_app};
use serde_json::json;
use warden_core::admin::PatternAdminOperator;
use warden_core::cache::{CacheHealthMonitor, PermissionCache};
use warden_core::error::StoreError;
use warden_core::store::{KeyValueStore, MemoryStore};
use warden_server::{AppState, create_router_with_state};

async fn seeded_app() -> TestApp {
    let app = test_app();
    app.store.set("perm:role-1", "a", None).await.unwrap();
    app.store.set("perm:role-2", "b", None).await.unwrap();
    app.store.set("session:abc", "c", None).await.unwrap();
    app
}

// === Preview ===

#[tokio::test]
async fn purge_preview_reports_blast_radius_without_mutating() {
    let app = seeded_app().await;

    let response = app
        .client
        .post_json("/store/purge", &json!({ "pattern": "perm:*", "preview": true }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["matched_count"], 2);
    assert_eq!(body["sample_keys"][0], "perm:role-1");
    assert_eq!(body["sample_keys"][1], "perm:role-2");
    assert_eq!(body["estimated_safe"], true);

    assert_eq!(app.store.entry_count(), 3);
}

#[tokio::test]
async fn preview_is_idempotent() {
    let app = seeded_app().await;

    let first: serde_json::Value = app
        .client
        .post_json("/store/purge", &json!({ "pattern": "perm:*", "preview": true }))
        .await
        .json();
    let second: serde_json::Value = app
        .client
        .post_json("/store/purge", &json!({ "pattern": "perm:*", "preview": true }))
        .await
        .json();

    assert_eq!(first, second);
}

#[tokio::test]
async fn confirm_without_flag_degrades_to_preview() {
    let app = seeded_app().await;

    // Sin confirm ni preview: dry run observablemente identico a un preview.
    let response = app
        .client
        .post_json("/store/purge", &json!({ "pattern": "*" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["matched_count"], 3);
    assert_eq!(app.store.entry_count(), 3, "el store no debe mutar");
}

#[tokio::test]
async fn preview_flag_wins_over_confirm() {
    let app = seeded_app().await;

    let body: serde_json::Value = app
        .client
        .post_json(
            "/store/purge",
            &json!({
                "pattern": "perm:*",
                "preview": true,
                "confirm": true,
                "reason": "checking blast radius first"
            }),
        )
        .await
        .json();

    assert_eq!(body["matched_count"], 2);
    assert_eq!(app.store.entry_count(), 3);
}

// === Purge confirm ===

#[tokio::test]
async fn confirmed_purge_deletes_matching_keys() {
    let app = seeded_app().await;

    let response = app
        .client
        .post_json(
            "/store/purge",
            &json!({
                "pattern": "perm:*",
                "confirm": true,
                "reason": "stale permission entries after role migration"
            }),
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted"], 2);

    let remaining = app.store.scan_keys("*").await.unwrap();
    assert_eq!(remaining, vec!["session:abc"]);
}

#[tokio::test]
async fn confirmed_purge_is_idempotent() {
    let app = seeded_app().await;
    let request = json!({
        "pattern": "perm:*",
        "confirm": true,
        "reason": "stale permission entries after role migration"
    });

    let first: serde_json::Value = app.client.post_json("/store/purge", &request).await.json();
    let second: serde_json::Value = app.client.post_json("/store/purge", &request).await.json();

    assert_eq!(first["deleted"], 2);
    assert_eq!(second["deleted"], 0);
}

#[tokio::test]
async fn confirmed_purge_requires_a_reason() {
    let app = seeded_app().await;

    let response = app
        .client
        .post_json("/store/purge", &json!({ "pattern": "perm:*", "confirm": true }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.store.entry_count(), 3);
}

#[tokio::test]
async fn purge_rejects_malformed_patterns() {
    let app = seeded_app().await;

    let response = app
        .client
        .post_json("/store/purge", &json!({ "pattern": "", "preview": true }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = app
        .client
        .post_json(
            "/store/purge",
            &json!({ "pattern": "x".repeat(201), "preview": true }),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

// === SetTTL ===

#[tokio::test]
async fn ttl_validation_bounds() {
    let app = seeded_app().await;

    for rejected in [0, -2, 2_592_001] {
        let response = app
            .client
            .post_json(
                "/store/ttl",
                &json!({
                    "pattern": "perm:*",
                    "ttl": rejected,
                    "confirm": true,
                    "reason": "ttl bounds validation check"
                }),
            )
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    for accepted in [-1, 2_592_000] {
        let response = app
            .client
            .post_json(
                "/store/ttl",
                &json!({
                    "pattern": "perm:*",
                    "ttl": accepted,
                    "confirm": true,
                    "reason": "ttl bounds validation check"
                }),
            )
            .await;
        response.assert_status(StatusCode::OK);
    }
}

#[tokio::test]
async fn confirmed_ttl_rewrite_updates_matching_keys() {
    let app = seeded_app().await;

    let response = app
        .client
        .post_json(
            "/store/ttl",
            &json!({
                "pattern": "perm:*",
                "ttl": 60,
                "confirm": true,
                "reason": "expire stale entries after incident"
            }),
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["updated"], 2);

    // Valores intactos hasta el nuevo deadline.
    assert_eq!(
        app.store.get("perm:role-1").await.unwrap().as_deref(),
        Some("a")
    );

    app.clock.advance(Duration::from_secs(61));
    assert!(app.store.get("perm:role-1").await.unwrap().is_none());
    assert!(app.store.get("session:abc").await.unwrap().is_some());
}

// === Fallas parciales ===

/// Store que falla cada mutacion despues de las primeras N.
struct FlakyStore {
    inner: MemoryStore,
    budget: AtomicUsize,
}

impl FlakyStore {
    fn take_budget(&self) -> Result<(), StoreError> {
        if self.budget.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
            n.checked_sub(1)
        }) == Err(0)
        {
            return Err(StoreError::unavailable("connection lost"));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        self.inner.scan_keys(pattern).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError> {
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        self.take_budget()?;
        self.inner.delete(key).await
    }

    async fn set_ttl(&self, key: &str, ttl: Option<Duration>) -> Result<bool, StoreError> {
        self.take_budget()?;
        self.inner.set_ttl(key, ttl).await
    }

    fn name(&self) -> &str {
        "flaky"
    }
}

#[tokio::test]
async fn partial_failure_reports_completed_count_over_http() {
    let inner = MemoryStore::new();
    for i in 0..5 {
        inner.set(&format!("perm:role-{i}"), "x", None).await.unwrap();
    }
    let store = Arc::new(FlakyStore {
        inner,
        budget: AtomicUsize::new(2),
    });

    let state = AppState::new(
        Arc::new(PermissionCache::new()),
        store.clone(),
        Arc::new(PatternAdminOperator::with_defaults(store)),
        Arc::new(CacheHealthMonitor::with_defaults()),
    );
    let client = TestClient::new(create_router_with_state(state));

    let response = client
        .post_json(
            "/store/purge",
            &json!({
                "pattern": "perm:*",
                "confirm": true,
                "reason": "stale permission entries after role migration"
            }),
        )
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Partial Completion");
    assert_eq!(body["completed"], 2);
    // Cada mutacion por key es idempotente: el cliente puede reintentar.
    assert_eq!(body["retryable"], true);
}

#[tokio::test]
async fn ttl_preview_does_not_touch_expiry() {
    let app = seeded_app().await;

    let body: serde_json::Value = app
        .client
        .post_json(
            "/store/ttl",
            &json!({ "pattern": "perm:*", "ttl": 60, "preview": true }),
        )
        .await
        .json();

    assert_eq!(body["matched_count"], 2);

    app.clock.advance(Duration::from_secs(3600));
    assert!(app.store.get("perm:role-1").await.unwrap().is_some());
}

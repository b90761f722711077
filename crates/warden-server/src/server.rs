use std::net::SocketAddr;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;

use crate::handlers::{
    admin::{purge, set_ttl},
    health::health_check,
    invalidate::{invalidate_all, invalidate_role},
    metrics::metrics_handler,
    stats::{cache_health, cache_stats, cached_roles},
    trace::trace_query,
};
use crate::middleware::{LoggingLayer, RequestIdLayer};
use crate::state::AppState;

/// Creates a router with the given application state.
pub fn create_router_with_state(state: AppState) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(LoggingLayer);

    Router::new()
        .route("/health", get(health_check))
        // Cache inspection routes
        .route("/cache/stats", get(cache_stats))
        .route("/cache/roles", get(cached_roles))
        .route("/cache/health", get(cache_health))
        // Cache invalidation routes
        .route("/cache/invalidate-all", post(invalidate_all))
        .route("/cache/invalidate/{role_id}", post(invalidate_role))
        // Pattern-scoped store administration
        .route("/store/purge", post(purge))
        .route("/store/ttl", post(set_ttl))
        // Correlation tracing
        .route("/trace/{correlation_id}", get(trace_query))
        .with_state(state)
        // HTTP metrics middleware
        .layer(middleware::from_fn(
            crate::metrics::http::http_metrics_middleware,
        ))
        .layer(middleware_stack)
}

/// Creates a router without state (for testing only - health endpoint).
pub fn create_router() -> Router {
    let middleware = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(LoggingLayer);

    Router::new()
        .route("/health", get(health_check))
        .layer(middleware)
}

/// Runs the server with the given state and metrics handle.
pub async fn run_server_with_state(
    addr: SocketAddr,
    state: AppState,
    prometheus_handle: PrometheusHandle,
) -> Result<(), std::io::Error> {
    // Router for metrics endpoint (different state)
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    let app = create_router_with_state(state).merge(metrics_router);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

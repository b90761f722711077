//! Warden admin server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use warden_core::admin::PatternAdminOperator;
use warden_core::cache::{CacheHealthMonitor, PermissionCache};
use warden_core::store::MemoryStore;
use warden_server::{
    AppState, HealthSampler, SamplerConfig, Settings, run_server_with_state,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().context("Failed to load configuration")?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    tracing::info!("Starting Warden Admin Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        safety_ceiling = settings.admin.safety_ceiling,
        sample_limit = settings.admin.sample_limit,
        max_ttl_seconds = settings.admin.max_ttl_seconds,
        "Pattern-operator limits loaded"
    );

    // Initialize metrics
    let prometheus_handle = warden_server::metrics::init_metrics();

    // Shared store; multi-node deployments plug a shared backend behind the
    // same trait.
    let store = Arc::new(MemoryStore::new());

    // Permission cache: one instance for the whole process lifetime.
    let cache = Arc::new(PermissionCache::new());
    let monitor = Arc::new(CacheHealthMonitor::with_defaults());
    let operator = Arc::new(PatternAdminOperator::new(
        store.clone(),
        settings.operator_config(),
    ));

    // Background health sampling; the handle stops the task on drop.
    let _sampler = HealthSampler::new(
        cache.clone(),
        monitor.clone(),
        SamplerConfig {
            interval: settings.monitor_interval(),
        },
    )
    .start();

    let state = AppState::new(cache, store, operator, monitor);

    run_server_with_state(addr, state, prometheus_handle).await?;

    Ok(())
}

//! # Warden Server
//!
//! HTTP administrative surface for the Warden permission cache: telemetry
//! inspection, invalidation, and pattern-scoped store operations behind the
//! preview → confirm protocol.

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod monitor;
pub mod server;
pub mod settings;
pub mod state;

// Re-exports
pub use error::AppError;
pub use handlers::health::HealthResponse;
pub use monitor::{HealthSampler, SamplerConfig, SamplerHandle};
pub use server::{create_router, create_router_with_state, run_server_with_state};
pub use settings::Settings;
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

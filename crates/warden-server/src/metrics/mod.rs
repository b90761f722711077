//! Metrics module for the Warden admin server.

pub mod cache;
pub mod http;
pub mod setup;

pub use cache::record_cache_stats;
pub use setup::init_metrics;

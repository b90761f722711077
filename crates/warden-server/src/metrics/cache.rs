//! Cache metrics recording.

use metrics::gauge;
use warden_core::cache::CacheStats;

/// Registra las metricas de cache.
/// Llamar una vez al inicio para registrar las metricas.
pub fn register_cache_metrics() {
    metrics::describe_gauge!(
        "warden_cache_hits",
        "Cache hits since the last full invalidation"
    );
    metrics::describe_gauge!(
        "warden_cache_misses",
        "Cache misses since the last full invalidation"
    );
    metrics::describe_gauge!(
        "warden_cache_hit_rate",
        "Cache hit rate percentage since the last full invalidation"
    );
    metrics::describe_gauge!("warden_cache_entries", "Current number of unexpired entries");
}

/// Refleja un snapshot de stats en los gauges de Prometheus.
///
/// Los contadores viven en el cache (se resetean con invalidate-all), por
/// eso se exportan como gauges y no como counters.
pub fn record_cache_stats(stats: &CacheStats) {
    gauge!("warden_cache_hits").set(stats.hits as f64);
    gauge!("warden_cache_misses").set(stats.misses as f64);
    gauge!("warden_cache_hit_rate").set(stats.hit_rate);
    gauge!("warden_cache_entries").set(stats.size as f64);
}

//! Cache inspection endpoint handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use warden_core::cache::{CacheStats, HealthWarning};

use crate::state::AppState;

/// Response para la lista de roles cacheados.
#[derive(Debug, Serialize)]
pub struct CachedRolesResponse {
    /// Role ids con entrada vigente, en orden lexicografico.
    pub roles: Vec<String>,
    /// Cantidad de roles listados.
    pub count: usize,
}

/// Una advertencia de salud junto a su hint de remediacion.
#[derive(Debug, Serialize)]
pub struct WarningReport {
    #[serde(flatten)]
    pub warning: HealthWarning,
    pub message: String,
    pub remediation: &'static str,
}

/// Response del reporte de salud del cache.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub warnings: Vec<WarningReport>,
}

/// GET /cache/stats
/// Snapshot de telemetria del cache. Lectura pura, sin efectos.
#[instrument(skip_all)]
pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache().stats())
}

/// GET /cache/roles
/// Inspeccion administrativa de los roles cacheados; no muta contadores.
#[instrument(skip_all)]
pub async fn cached_roles(State(state): State<AppState>) -> Json<CachedRolesResponse> {
    let roles = state.cache().cached_role_ids();
    let count = roles.len();

    Json(CachedRolesResponse { roles, count })
}

/// GET /cache/health
/// Clasifica el snapshot actual de stats en advertencias.
#[instrument(skip_all)]
pub async fn cache_health(State(state): State<AppState>) -> Json<HealthReport> {
    let stats = state.cache().stats();
    let warnings = state
        .monitor()
        .evaluate(&stats)
        .into_iter()
        .map(|warning| WarningReport {
            message: warning.to_string(),
            remediation: warning.remediation(),
            warning,
        })
        .collect();

    Json(HealthReport { warnings })
}

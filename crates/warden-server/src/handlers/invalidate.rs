//! Cache invalidation endpoint handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::require_reason;
use crate::error::AppError;
use crate::state::AppState;

/// Body comun de las operaciones destructivas: el `reason` queda en el log
/// estructurado para auditoria.
#[derive(Debug, Deserialize)]
pub struct ReasonBody {
    pub reason: Option<String>,
}

/// Response de la invalidacion completa.
#[derive(Debug, Serialize)]
pub struct InvalidateAllResponse {
    pub cleared: bool,
}

/// Response de la invalidacion de un role.
#[derive(Debug, Serialize)]
pub struct InvalidateResponse {
    pub invalidated: bool,
}

/// POST /cache/invalidate-all
/// Vacia el cache completo y resetea los contadores de hit/miss a cero,
/// dejando una linea base limpia para la telemetria.
#[instrument(skip_all)]
pub async fn invalidate_all(
    State(state): State<AppState>,
    Json(body): Json<ReasonBody>,
) -> Result<Json<InvalidateAllResponse>, AppError> {
    let reason = require_reason(body.reason.as_deref())?;

    let cleared = state.cache().invalidate_all();

    tracing::info!(
        cleared = cleared,
        reason = %reason,
        "All cache entries invalidated, counters reset"
    );

    Ok(Json(InvalidateAllResponse { cleared: true }))
}

/// POST /cache/invalidate/{role_id}
/// Invalida la entrada de un role especifico. No-op si no existe.
#[instrument(skip_all, fields(role = %path.role_id))]
pub async fn invalidate_role(
    State(state): State<AppState>,
    Path(path): Path<RolePath>,
    Json(body): Json<ReasonBody>,
) -> Result<Json<InvalidateResponse>, AppError> {
    let reason = require_reason(body.reason.as_deref())?;

    let invalidated = state.cache().invalidate(&path.role_id);

    tracing::info!(
        role = %path.role_id,
        invalidated = invalidated,
        reason = %reason,
        "Cache entry invalidation requested"
    );

    Ok(Json(InvalidateResponse { invalidated }))
}

// Path extractors

#[derive(Debug, Deserialize)]
pub struct RolePath {
    pub role_id: String,
}

//! Correlation trace endpoint handler.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use warden_core::trace::LogQuery;

use crate::state::AppState;

/// Response con el descriptor de busqueda de logs.
#[derive(Debug, Serialize)]
pub struct TraceResponse {
    pub query: LogQuery,
    pub expression: String,
}

/// GET /trace/{correlation_id}
/// Describe donde buscar todas las lineas de log de una request.
#[instrument(skip_all, fields(correlation_id = %path.correlation_id))]
pub async fn trace_query(
    State(state): State<AppState>,
    Path(path): Path<TracePath>,
) -> Json<TraceResponse> {
    let query = state.tracer().locate(&path.correlation_id);
    let expression = query.expression();

    Json(TraceResponse { query, expression })
}

#[derive(Debug, Deserialize)]
pub struct TracePath {
    pub correlation_id: String,
}

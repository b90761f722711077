//! Pattern-scoped store administration endpoints.
//!
//! Las dos operaciones (purge y reescritura de TTL) siguen el protocolo
//! preview → confirm del operador: sin `confirm=true` la llamada es
//! observablemente un preview y no muta nada. `preview=true` fuerza el dry
//! run aunque venga `confirm`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use warden_core::admin::{AdminOperation, ConfirmOutcome};

use super::require_reason;
use crate::error::AppError;
use crate::state::AppState;

/// Request body para purge por patron.
#[derive(Debug, Deserialize)]
pub struct PurgeRequest {
    /// Patron glob (1-200 caracteres).
    pub pattern: String,
    /// Fuerza un dry run.
    #[serde(default)]
    pub preview: bool,
    /// Requerido para mutar; ausente o false degrada a preview.
    #[serde(default)]
    pub confirm: bool,
    /// Obligatorio (10-500 caracteres) cuando la llamada es destructiva.
    pub reason: Option<String>,
}

/// Request body para reescritura de TTL por patron.
#[derive(Debug, Deserialize)]
pub struct SetTtlRequest {
    /// Patron glob (1-200 caracteres).
    pub pattern: String,
    /// TTL en segundos: -1 = sin expiracion, sino 1..=2592000.
    pub ttl: i64,
    #[serde(default)]
    pub preview: bool,
    #[serde(default)]
    pub confirm: bool,
    pub reason: Option<String>,
}

/// Response de un purge ejecutado.
#[derive(Debug, Serialize)]
pub struct PurgeExecuted {
    pub pattern: String,
    pub deleted: usize,
}

/// Response de una reescritura de TTL ejecutada.
#[derive(Debug, Serialize)]
pub struct TtlExecuted {
    pub pattern: String,
    pub updated: usize,
}

/// POST /store/purge
#[instrument(skip_all, fields(pattern = %request.pattern))]
pub async fn purge(
    State(state): State<AppState>,
    Json(request): Json<PurgeRequest>,
) -> Result<Response, AppError> {
    let confirmed = request.confirm && !request.preview;

    if confirmed {
        let reason = require_reason(request.reason.as_deref())?;
        tracing::info!(
            pattern = %request.pattern,
            store = state.store().name(),
            reason = %reason,
            "Confirmed purge requested"
        );
    }

    let outcome = state
        .operator()
        .confirm(&request.pattern, AdminOperation::Purge, confirmed)
        .await?;

    match outcome {
        ConfirmOutcome::DryRun(preview) => Ok((StatusCode::OK, Json(preview)).into_response()),
        ConfirmOutcome::Purged { deleted } => Ok((
            StatusCode::OK,
            Json(PurgeExecuted {
                pattern: request.pattern,
                deleted,
            }),
        )
            .into_response()),
        ConfirmOutcome::TtlUpdated { .. } => {
            Err(AppError::Internal("unexpected operation outcome".to_string()))
        }
    }
}

/// POST /store/ttl
#[instrument(skip_all, fields(pattern = %request.pattern, ttl = request.ttl))]
pub async fn set_ttl(
    State(state): State<AppState>,
    Json(request): Json<SetTtlRequest>,
) -> Result<Response, AppError> {
    let confirmed = request.confirm && !request.preview;

    if confirmed {
        let reason = require_reason(request.reason.as_deref())?;
        tracing::info!(
            pattern = %request.pattern,
            ttl = request.ttl,
            store = state.store().name(),
            reason = %reason,
            "Confirmed TTL rewrite requested"
        );
    }

    let outcome = state
        .operator()
        .confirm(
            &request.pattern,
            AdminOperation::SetTtl {
                ttl_seconds: request.ttl,
            },
            confirmed,
        )
        .await?;

    match outcome {
        ConfirmOutcome::DryRun(preview) => Ok((StatusCode::OK, Json(preview)).into_response()),
        ConfirmOutcome::TtlUpdated { updated } => Ok((
            StatusCode::OK,
            Json(TtlExecuted {
                pattern: request.pattern,
                updated,
            }),
        )
            .into_response()),
        ConfirmOutcome::Purged { .. } => {
            Err(AppError::Internal("unexpected operation outcome".to_string()))
        }
    }
}

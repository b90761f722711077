//! HTTP handlers del servidor administrativo.

pub mod admin;
pub mod health;
pub mod invalidate;
pub mod metrics;
pub mod stats;
pub mod trace;

use crate::error::AppError;

/// Longitud minima aceptada para `reason`.
const REASON_MIN_LEN: usize = 10;
/// Longitud maxima aceptada para `reason`.
const REASON_MAX_LEN: usize = 500;

/// Toda accion administrativa destructiva exige un `reason` auditable de
/// 10-500 caracteres. Se valida antes de tocar cache o store.
pub(crate) fn require_reason(reason: Option<&str>) -> Result<&str, AppError> {
    let reason = reason.map(str::trim).unwrap_or_default();
    let len = reason.chars().count();

    if len < REASON_MIN_LEN || len > REASON_MAX_LEN {
        return Err(AppError::BadRequest(format!(
            "a reason of {REASON_MIN_LEN}-{REASON_MAX_LEN} characters is required for destructive operations"
        )));
    }

    Ok(reason)
}

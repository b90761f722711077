use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use warden_core::error::AdminError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Parametros invalidos (patron, TTL o reason)
    #[error("{0}")]
    BadRequest(String),

    /// El store no es alcanzable; la operacion puede reintentarse
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Mutacion multi-key detenida a mitad de camino
    #[error("operation stopped after {completed} keys: {message}")]
    PartialCompletion { completed: usize, message: String },

    /// Error interno
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retryable: Option<bool>,
}

impl From<AdminError> for AppError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::InvalidPattern { .. } | AdminError::InvalidTtl { .. } => {
                AppError::BadRequest(err.to_string())
            }
            AdminError::Store(store_err) => AppError::StoreUnavailable(store_err.to_string()),
            AdminError::Partial { completed, source } => AppError::PartialCompletion {
                completed,
                message: source.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, completed, retryable) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad Request", msg, None, None)
            }
            AppError::StoreUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Store Unavailable",
                msg,
                None,
                Some(true),
            ),
            AppError::PartialCompletion { completed, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Partial Completion",
                message,
                Some(completed),
                // Cada mutacion por key es idempotente; reintentar la misma
                // request es seguro.
                Some(true),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                msg,
                None,
                None,
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            completed,
            retryable,
        });

        (status, body).into_response()
    }
}

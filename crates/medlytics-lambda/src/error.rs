use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use medlytics_auth::error::AuthError;
use medlytics_core::error::CoreError;
use medlytics_instruments::error::InstrumentError;
use medlytics_instruments::scoring::ValidationError;
use medlytics_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// Request body failed questionnaire range checks.
    Validation(Vec<ValidationError>),
    Unauthorized(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<ValidationError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, violations) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "validation failed".to_string(),
                violations,
            ),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, Vec::new()),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                violations,
            }),
        )
            .into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            // The key names the owner; keep it out of the response.
            StorageError::NotFound { key } => {
                tracing::debug!(key = %key, "analysis not found");
                ApiError::NotFound("analysis not found".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<InstrumentError> for ApiError {
    fn from(e: InstrumentError) -> Self {
        match e {
            InstrumentError::UnknownInstrument(id) => {
                ApiError::NotFound(format!("unknown analysis type: {id}"))
            }
            InstrumentError::Validation(violations) => {
                tracing::info!(count = violations.len(), "questionnaire rejected");
                ApiError::Validation(violations)
            }
            InstrumentError::Decode(e) => ApiError::BadRequest(format!("malformed questionnaire: {e}")),
            other @ InstrumentError::Encode(_) => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownKind(kind) => ApiError::NotFound(format!("unknown analysis type: {kind}")),
            CoreError::UnknownRiskLevel(_) => ApiError::BadRequest(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        tracing::debug!(error = %e, "rejected caller credentials");
        ApiError::Unauthorized(e.to_string())
    }
}

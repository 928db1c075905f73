use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kitmate_client::MatchApiError;
use kitmate_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`MatchApiError`] for matching
/// backend failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `kitmate_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A matching-backend error that must surface to the caller.
    #[error(transparent)]
    Upstream(#[from] MatchApiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A missing resource with a friendly, user-facing message.
    #[error("{0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with key {key} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Matching-backend errors ---
            AppError::Upstream(err) => classify_upstream_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a matching-backend error into an HTTP status, code, and message.
///
/// - Upstream 4xx means the caller's input was rejected; relay it as 400
///   with the backend's normalized detail.
/// - Everything else (5xx, transport failures) maps to 502.
fn classify_upstream_error(err: &MatchApiError) -> (StatusCode, &'static str, String) {
    match err {
        MatchApiError::Api { status, detail } if (400..500).contains(status) => {
            (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
        }
        MatchApiError::Api { status, detail } => {
            tracing::error!(status, %detail, "Matching backend error");
            (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", detail.clone())
        }
        MatchApiError::Request(err) => {
            tracing::error!(error = %err, "Matching backend unreachable");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "The generation service is unavailable".to_string(),
            )
        }
    }
}

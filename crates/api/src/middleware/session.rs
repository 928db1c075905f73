//! Session-key extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

const SESSION_HEADER: &str = "x-session-key";

/// Session key extracted from the `x-session-key` header.
///
/// Use this as an extractor parameter in any handler that requires a
/// session:
///
/// ```ignore
/// async fn my_handler(SessionKey(session): SessionKey) -> AppResult<Json<()>> {
///     tracing::debug!(%session, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SessionKey(pub Uuid);

impl FromRequestParts<AppState> for SessionKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::BadRequest("Missing x-session-key header".into()))?;

        let session = header
            .parse::<Uuid>()
            .map_err(|_| AppError::BadRequest("Invalid session key".into()))?;

        Ok(SessionKey(session))
    }
}

/// Like [`SessionKey`], but absence of the header is not an error.
/// Used on public routes (the toolkit page) that work without a session.
#[derive(Debug, Clone, Copy)]
pub struct MaybeSessionKey(pub Option<Uuid>);

impl FromRequestParts<AppState> for MaybeSessionKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<Uuid>().ok());

        Ok(MaybeSessionKey(session))
    }
}

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the matching backend is reachable.
    pub upstream_healthy: bool,
}

/// GET /health -- returns service and matching-backend health.
///
/// The service itself is always `ok` or `degraded`; an unreachable backend
/// degrades but never fails this endpoint, since the fallback generator
/// keeps the product usable.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let upstream_healthy = state.backend.health().await;

    let status = if upstream_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        upstream_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

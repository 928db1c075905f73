//! Generation handlers.

use axum::extract::{Path, State};
use axum::Json;
use kitmate_core::toolkit::Toolkit;
use kitmate_pipeline::{GenerateOutcome, PipelineError, ProgressSnapshot};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::session::SessionKey;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateView {
    /// `generated`, `cached`, or `inFlight`.
    pub status: &'static str,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolkit: Option<Toolkit>,
}

/// POST /generate -- generate (or reuse) the toolkit for the session's
/// submitted profile.
pub async fn generate(
    SessionKey(session): SessionKey,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<GenerateView>>> {
    let outcome = state
        .orchestrator
        .generate_for(session)
        .await
        .map_err(|err| match err {
            PipelineError::MissingProfile => AppError::NotFound(
                "No profile data found. Please start from the beginning.".to_string(),
            ),
        })?;

    let view = match outcome {
        GenerateOutcome::Generated(toolkit) => GenerateView {
            status: "generated",
            slug: toolkit.slug.clone(),
            toolkit: Some(toolkit),
        },
        GenerateOutcome::Cached(toolkit) => GenerateView {
            status: "cached",
            slug: toolkit.slug.clone(),
            toolkit: Some(toolkit),
        },
        GenerateOutcome::InFlight { slug } => GenerateView {
            status: "inFlight",
            slug,
            toolkit: None,
        },
    };
    Ok(Json(DataResponse { data: view }))
}

/// GET /generate/{slug}/progress -- pollable progress feed for an in-flight
/// or settled generation.
pub async fn progress(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ProgressSnapshot>>> {
    let snapshot = state
        .orchestrator
        .progress(&slug)
        .await
        .ok_or_else(|| {
            AppError::NotFound("No generation has started for this toolkit.".to_string())
        })?;
    Ok(Json(DataResponse { data: snapshot }))
}

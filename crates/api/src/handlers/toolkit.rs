//! Toolkit page handler.

use axum::extract::{Path, State};
use axum::Json;
use kitmate_core::toolkit::Toolkit;
use kitmate_pipeline::resolve::resolve_toolkit;

use crate::error::{AppError, AppResult};
use crate::middleware::session::MaybeSessionKey;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /toolkits/{slug} -- resolve a toolkit for display.
///
/// Works without a session so shared links and the demo profiles stay
/// reachable. A miss returns the page's friendly empty-state message.
pub async fn get_toolkit(
    MaybeSessionKey(session): MaybeSessionKey,
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Toolkit>>> {
    let toolkit = resolve_toolkit(&state.store, &state.orchestrator, session, &slug)
        .await
        .ok_or_else(|| {
            AppError::NotFound("This toolkit doesn't exist yet. Create your own!".to_string())
        })?;
    Ok(Json(DataResponse { data: toolkit }))
}

//! First-visit welcome handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WelcomeView {
    pub seen: bool,
}

/// GET /welcome/{client_id} -- whether this client has seen the welcome
/// banner. Unknown ids read as not seen.
pub async fn status(
    Path(client_id): Path<String>,
    State(state): State<AppState>,
) -> Json<DataResponse<WelcomeView>> {
    let seen = state.welcome.has_seen(&client_id).await;
    Json(DataResponse {
        data: WelcomeView { seen },
    })
}

/// POST /welcome/{client_id}/seen -- mark the banner as seen. Idempotent.
pub async fn mark_seen(
    Path(client_id): Path<String>,
    State(state): State<AppState>,
) -> Json<DataResponse<WelcomeView>> {
    state.welcome.mark_seen(&client_id).await;
    Json(DataResponse {
        data: WelcomeView { seen: true },
    })
}

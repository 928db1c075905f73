//! Session lifecycle handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    pub session_key: Uuid,
}

/// POST /sessions -- allocate a new session.
///
/// The returned key goes into the `x-session-key` header of subsequent
/// requests.
pub async fn create_session(State(state): State<AppState>) -> Json<DataResponse<SessionCreated>> {
    let session_key = state.store.create().await;
    tracing::debug!(%session_key, "session created");
    Json(DataResponse {
        data: SessionCreated { session_key },
    })
}

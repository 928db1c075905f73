//! Catalog and suggestion handlers.
//!
//! Catalogs prefer the matching backend's live lists and fall back to the
//! built-in catalogs when the backend is unreachable or returns nothing.

use axum::extract::{Query, State};
use axum::Json;
use kitmate_client::types::CatalogItem;
use kitmate_core::catalog;
use serde::Deserialize;

use crate::response::DataResponse;
use crate::state::AppState;

fn local_items(entries: &[catalog::CatalogEntry]) -> Vec<CatalogItem> {
    entries
        .iter()
        .map(|e| CatalogItem {
            id: e.id.to_string(),
            label: e.label.to_string(),
            icon: e.icon.to_string(),
        })
        .collect()
}

/// GET /catalog/professions
pub async fn professions(State(state): State<AppState>) -> Json<DataResponse<Vec<CatalogItem>>> {
    let mut items = state.backend.professions().await;
    if items.is_empty() {
        items = local_items(catalog::PROFESSIONS);
    }
    Json(DataResponse { data: items })
}

/// GET /catalog/hobbies
pub async fn hobbies(State(state): State<AppState>) -> Json<DataResponse<Vec<CatalogItem>>> {
    let mut items = state.backend.hobbies().await;
    if items.is_empty() {
        items = local_items(catalog::HOBBIES);
    }
    Json(DataResponse { data: items })
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /suggest?q= -- search suggestions. Degrades to an empty list.
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> Json<DataResponse<Vec<String>>> {
    let suggestions = if query.q.trim().is_empty() {
        Vec::new()
    } else {
        state.backend.suggest(&query.q).await
    };
    Json(DataResponse { data: suggestions })
}

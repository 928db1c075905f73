pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sessions                      create session (POST)
///
/// /onboarding/start              wizard entry position (GET)
/// /onboarding/persona            store persona sentence, local match (POST)
/// /onboarding/parse              backend intent parsing (POST)
/// /onboarding/submit             complete the wizard (POST)
///
/// /generate                      generate toolkit for session (POST)
/// /generate/{slug}/progress      poll generation progress (GET)
///
/// /toolkits/{slug}               resolve toolkit for display (GET)
///
/// /catalog/professions           profession catalog (GET)
/// /catalog/hobbies               hobby catalog (GET)
/// /suggest                       search suggestions (GET)
///
/// /welcome/{client_id}           welcome banner status (GET)
/// /welcome/{client_id}/seen      mark banner seen (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(handlers::session::create_session))
        .route("/onboarding/start", get(handlers::onboarding::start))
        .route("/onboarding/persona", post(handlers::onboarding::persona))
        .route("/onboarding/parse", post(handlers::onboarding::parse))
        .route("/onboarding/submit", post(handlers::onboarding::submit))
        .route("/generate", post(handlers::generation::generate))
        .route("/generate/{slug}/progress", get(handlers::generation::progress))
        .route("/toolkits/{slug}", get(handlers::toolkit::get_toolkit))
        .route("/catalog/professions", get(handlers::catalog::professions))
        .route("/catalog/hobbies", get(handlers::catalog::hobbies))
        .route("/suggest", get(handlers::catalog::suggest))
        .route("/welcome/{client_id}", get(handlers::welcome::status))
        .route("/welcome/{client_id}/seen", post(handlers::welcome::mark_seen))
}

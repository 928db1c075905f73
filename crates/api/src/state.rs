use std::sync::Arc;

use kitmate_client::MatchBackend;
use kitmate_pipeline::Orchestrator;
use kitmate_session::{SessionStore, WelcomeLedger};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Per-visitor session storage.
    pub store: Arc<SessionStore>,
    /// First-visit welcome tracking.
    pub welcome: Arc<WelcomeLedger>,
    /// Matching-backend client (trait object so tests can stub it).
    pub backend: Arc<dyn MatchBackend>,
    /// Generation orchestrator.
    pub orchestrator: Arc<Orchestrator>,
}

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use kitmate_api::config::ServerConfig;
use kitmate_api::router::build_app_router;
use kitmate_api::state::AppState;
use kitmate_client::types::{CatalogItem, GenerateRequest, ParsedIntent, ToolkitResponse};
use kitmate_client::{MatchApiError, MatchBackend};
use kitmate_core::toolkit::ToolkitSpecs;
use kitmate_core::{catalog, fallback};
use kitmate_pipeline::Orchestrator;
use kitmate_session::{SessionStore, WelcomeLedger};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        match_api_url: "http://localhost:18512".to_string(),
        session_idle_secs: 3600,
        settled_ttl_secs: 3600,
        sweep_interval_secs: 300,
    }
}

/// Scriptable matching backend for integration tests.
pub struct StubBackend {
    pub generate_calls: AtomicUsize,
    pub healthy: bool,
    pub fail_generate: bool,
    pub fail_parse: bool,
    pub suggestions: Vec<String>,
    pub parse_intent: ParsedIntent,
}

impl StubBackend {
    /// A healthy backend that answers every request.
    pub fn ok() -> Self {
        Self {
            generate_calls: AtomicUsize::new(0),
            healthy: true,
            fail_generate: false,
            fail_parse: false,
            suggestions: vec!["Product Manager".to_string(), "Project Manager".to_string()],
            parse_intent: ParsedIntent {
                profession: "developer".to_string(),
                profession_label: "Software Developer".to_string(),
                hobby: "gaming".to_string(),
                hobby_label: "Gaming".to_string(),
                name: Some("Alex".to_string()),
                confidence: 0.92,
            },
        }
    }

    /// A backend whose generation and parsing fail with 503.
    pub fn down() -> Self {
        Self {
            fail_generate: true,
            fail_parse: true,
            healthy: false,
            suggestions: Vec::new(),
            ..Self::ok()
        }
    }

    pub fn generate_call_count(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    fn unavailable() -> MatchApiError {
        MatchApiError::Api {
            status: 503,
            detail: "Generation engine overloaded".to_string(),
        }
    }
}

#[async_trait]
impl MatchBackend for StubBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<ToolkitResponse, MatchApiError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_generate {
            return Err(Self::unavailable());
        }
        let work = fallback::work_tools_for(&request.profession);
        let life = fallback::life_tools_for(&request.hobby);
        Ok(ToolkitResponse {
            id: "tk-test".to_string(),
            slug: format!("{}-{}-{}", request.name.to_lowercase(), request.profession, request.hobby),
            user_name: request.name.clone(),
            profession: catalog::profession_label(&request.profession),
            profession_slug: request.profession.clone(),
            life_context: catalog::hobby_label(&request.hobby),
            specs: ToolkitSpecs::compute(&work, &life, 0),
            work_tools: work,
            life_tools: life,
            description: "A personalized AI toolkit.".to_string(),
            long_description: "A longer description of the toolkit.".to_string(),
            created_at: "2026-08-26T00:00:00Z".to_string(),
        })
    }

    async fn parse(&self, _input: &str) -> Result<ParsedIntent, MatchApiError> {
        if self.fail_parse {
            return Err(Self::unavailable());
        }
        Ok(self.parse_intent.clone())
    }

    async fn smart_generate(&self, input: &str) -> Result<ToolkitResponse, MatchApiError> {
        let intent = self.parse(input).await?;
        let request = GenerateRequest {
            profession: intent.profession,
            hobby: intent.hobby,
            name: intent.name.unwrap_or_default(),
            use_ai: true,
        };
        self.generate(&request).await
    }

    async fn suggest(&self, _query: &str) -> Vec<String> {
        self.suggestions.clone()
    }

    async fn professions(&self) -> Vec<CatalogItem> {
        Vec::new()
    }

    async fn hobbies(&self) -> Vec<CatalogItem> {
        Vec::new()
    }

    async fn health(&self) -> bool {
        self.healthy
    }
}

/// Build the full application router around the given backend, mirroring
/// the construction in `main.rs` so tests exercise the production
/// middleware stack.
pub fn build_test_app(backend: Arc<dyn MatchBackend>) -> Router {
    let config = test_config();
    let store = Arc::new(SessionStore::new());
    let orchestrator = Arc::new(Orchestrator::new(Arc::clone(&backend), Arc::clone(&store)));

    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        welcome: Arc::new(WelcomeLedger::new()),
        backend,
        orchestrator,
    };

    build_app_router(state, &config)
}

// ---- request helpers ----

pub async fn get(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    request(app, "GET", path, None, None).await
}

pub async fn get_with_session(
    app: &Router,
    path: &str,
    session: &str,
) -> (StatusCode, serde_json::Value) {
    request(app, "GET", path, Some(session), None).await
}

pub async fn post_json(
    app: &Router,
    path: &str,
    session: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    request(app, "POST", path, session, Some(body)).await
}

async fn request(
    app: &Router,
    method: &str,
    path: &str,
    session: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(session) = session {
        builder = builder.header("x-session-key", session);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Create a session via the API and return its key.
pub async fn create_session(app: &Router) -> String {
    let (status, body) = post_json(app, "/api/v1/sessions", None, serde_json::json!({})).await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["sessionKey"].as_str().unwrap().to_string()
}

//! Generation orchestration.
//!
//! One entry point per session: read the onboarding submission, claim the
//! slug's latch, call the matching backend, and settle with either the
//! backend's toolkit or a locally synthesized fallback. Backend failures
//! never surface to the visitor; they are logged and absorbed.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use kitmate_client::types::{GenerateRequest, ToolkitResponse};
use kitmate_client::MatchBackend;
use kitmate_core::onboarding::OnboardingSubmission;
use kitmate_core::toolkit::Toolkit;
use kitmate_core::{catalog, fallback};
use kitmate_session::{keys, SessionStore};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::progress::{ProgressSnapshot, ProgressTracker};
use crate::task::{BeginOutcome, TaskBoard};

/// Pipeline-level failures the API layer translates into responses.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The session has no onboarding submission to generate from.
    #[error("no onboarding profile in session")]
    MissingProfile,
}

/// How a generation request resolved.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// This request ran the generation (backend or fallback).
    Generated(Toolkit),
    /// The slug settled earlier; the cached toolkit is returned.
    Cached(Toolkit),
    /// Another request is generating this slug right now.
    InFlight { slug: String },
}

/// Drives toolkit generation for all sessions.
pub struct Orchestrator {
    backend: Arc<dyn MatchBackend>,
    store: Arc<SessionStore>,
    board: TaskBoard,
    trackers: RwLock<HashMap<String, ProgressTracker>>,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn MatchBackend>, store: Arc<SessionStore>) -> Self {
        Self {
            backend,
            store,
            board: TaskBoard::new(),
            trackers: RwLock::new(HashMap::new()),
        }
    }

    /// Generate (or reuse) the toolkit for the session's submitted profile.
    pub async fn generate_for(&self, session: Uuid) -> Result<GenerateOutcome, PipelineError> {
        let submission: OnboardingSubmission = self
            .store
            .get(session, keys::ONBOARDING_DATA)
            .await
            .ok_or(PipelineError::MissingProfile)?;

        let slug = submission.slug.clone();
        match self.board.begin(&slug).await {
            BeginOutcome::Settled(toolkit) => {
                // Re-persist so a fresh session landing on a settled slug
                // still finds it locally.
                self.store.put(session, keys::GENERATED_TOOLKIT, &toolkit).await;
                Ok(GenerateOutcome::Cached(toolkit))
            }
            BeginOutcome::InFlight => Ok(GenerateOutcome::InFlight { slug }),
            BeginOutcome::Started => {
                let toolkit = self.run_generation(session, &submission).await;
                Ok(GenerateOutcome::Generated(toolkit))
            }
        }
    }

    async fn run_generation(&self, session: Uuid, submission: &OnboardingSubmission) -> Toolkit {
        let slug = &submission.slug;
        let tracker = ProgressTracker::start();
        self.trackers
            .write()
            .await
            .insert(slug.clone(), tracker.clone());

        let request = GenerateRequest {
            profession: submission.profession.clone(),
            hobby: submission.primary_hobby().to_string(),
            name: submission.name.clone(),
            use_ai: true,
        };

        let toolkit = match self.backend.generate(&request).await {
            Ok(response) => merge_response(response, submission),
            Err(err) => {
                tracing::warn!(%slug, %err, "backend generation failed, using local fallback");
                fallback::synthesize_toolkit(
                    &submission.profession,
                    submission.primary_hobby(),
                    &submission.name,
                    slug,
                )
            }
        };

        self.store.put(session, keys::GENERATED_TOOLKIT, &toolkit).await;
        self.board.settle(slug, toolkit.clone()).await;
        tracker.settle();
        // The live feed is only needed while the request is outstanding;
        // settled slugs answer progress queries from the board.
        self.trackers.write().await.remove(slug);
        toolkit
    }

    /// Progress feed for a slug, if a generation has started.
    pub async fn progress(&self, slug: &str) -> Option<ProgressSnapshot> {
        if let Some(tracker) = self.trackers.read().await.get(slug) {
            return Some(tracker.snapshot());
        }
        if self.board.settled(slug).await.is_some() {
            return Some(ProgressTracker::settled_snapshot());
        }
        None
    }

    /// The settled toolkit for a slug, regardless of session.
    pub async fn settled(&self, slug: &str) -> Option<Toolkit> {
        self.board.settled(slug).await
    }

    /// Evict settled slugs older than `max_age` and return how many went.
    /// Evicted slugs generate fresh on their next request.
    pub async fn purge_settled(&self, max_age: Duration) -> usize {
        self.board.purge_settled(max_age).await
    }
}

/// Complete a backend response with the locally derived display fields.
fn merge_response(response: ToolkitResponse, submission: &OnboardingSubmission) -> Toolkit {
    let profession_label = catalog::profession_label(&submission.profession);
    let mut specs = response.specs;
    if specs.updated_at.is_none() {
        specs.updated_at = Some(fallback::display_updated_at());
    }

    Toolkit {
        user_name: response.user_name,
        slug: submission.slug.clone(),
        profession: response.profession,
        profession_slug: response.profession_slug,
        work_context: format!("{profession_label} Workflow"),
        life_context: response.life_context.clone(),
        description: response.description,
        long_description: response.long_description,
        work_tools: response.work_tools,
        life_tools: response.life_tools,
        specs,
        faq: fallback::faq_entries(&profession_label, &response.life_context),
        related_professions: fallback::related_professions(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use kitmate_client::types::{CatalogItem, ParsedIntent};
    use kitmate_client::MatchApiError;
    use kitmate_core::toolkit::ToolkitSpecs;

    struct StubBackend {
        calls: AtomicUsize,
        fail: bool,
        delay: Duration,
    }

    impl StubBackend {
        fn ok() -> Self {
            Self { calls: AtomicUsize::new(0), fail: false, delay: Duration::ZERO }
        }

        fn failing() -> Self {
            Self { calls: AtomicUsize::new(0), fail: true, delay: Duration::ZERO }
        }

        fn slow() -> Self {
            Self { calls: AtomicUsize::new(0), fail: false, delay: Duration::from_millis(50) }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MatchBackend for StubBackend {
        async fn generate(
            &self,
            request: &GenerateRequest,
        ) -> Result<ToolkitResponse, MatchApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.fail {
                return Err(MatchApiError::Api {
                    status: 503,
                    detail: "API error: 503".to_string(),
                });
            }
            let work = fallback::work_tools_for(&request.profession);
            let life = fallback::life_tools_for(&request.hobby);
            Ok(ToolkitResponse {
                id: "tk-1".into(),
                slug: "ignored-by-merge".into(),
                user_name: request.name.clone(),
                profession: catalog::profession_label(&request.profession),
                profession_slug: request.profession.clone(),
                life_context: catalog::hobby_label(&request.hobby),
                specs: ToolkitSpecs::compute(&work, &life, 0),
                work_tools: work,
                life_tools: life,
                description: "desc".into(),
                long_description: "long desc".into(),
                created_at: "2026-08-26T00:00:00Z".into(),
            })
        }

        async fn parse(&self, _input: &str) -> Result<ParsedIntent, MatchApiError> {
            unimplemented!("not exercised here")
        }

        async fn smart_generate(&self, _input: &str) -> Result<ToolkitResponse, MatchApiError> {
            unimplemented!("not exercised here")
        }

        async fn suggest(&self, _query: &str) -> Vec<String> {
            Vec::new()
        }

        async fn professions(&self) -> Vec<CatalogItem> {
            Vec::new()
        }

        async fn hobbies(&self) -> Vec<CatalogItem> {
            Vec::new()
        }

        async fn health(&self) -> bool {
            true
        }
    }

    async fn submitted_session(store: &SessionStore) -> Uuid {
        let session = store.create().await;
        let submission = OnboardingSubmission {
            name: "Alex".into(),
            profession: "developer".into(),
            profession_label: "Software Developer".into(),
            hobbies: vec!["gaming".into()],
            custom_hobby: None,
            slug: "alex-developer-gaming".into(),
        };
        store.put(session, keys::ONBOARDING_DATA, &submission).await;
        session
    }

    fn orchestrator(backend: Arc<StubBackend>, store: Arc<SessionStore>) -> Orchestrator {
        Orchestrator::new(backend, store)
    }

    #[tokio::test]
    async fn missing_profile_is_an_error() {
        let store = Arc::new(SessionStore::new());
        let session = store.create().await;
        let orch = orchestrator(Arc::new(StubBackend::ok()), Arc::clone(&store));

        assert_matches!(orch.generate_for(session).await, Err(PipelineError::MissingProfile));
    }

    #[tokio::test]
    async fn generation_merges_display_fields_and_persists() {
        let store = Arc::new(SessionStore::new());
        let session = submitted_session(&store).await;
        let orch = orchestrator(Arc::new(StubBackend::ok()), Arc::clone(&store));

        let outcome = orch.generate_for(session).await.unwrap();
        let toolkit = assert_matches!(outcome, GenerateOutcome::Generated(t) => t);

        // Slug comes from the submission, not the backend response.
        assert_eq!(toolkit.slug, "alex-developer-gaming");
        assert_eq!(toolkit.work_context, "Software Developer Workflow");
        assert_eq!(toolkit.faq.len(), 3);
        assert!(toolkit.specs.updated_at.is_some());

        let cached: Option<Toolkit> = store.get(session, keys::GENERATED_TOOLKIT).await;
        assert_eq!(cached.unwrap().slug, "alex-developer-gaming");
    }

    #[tokio::test]
    async fn repeat_request_reuses_the_settled_toolkit() {
        let store = Arc::new(SessionStore::new());
        let session = submitted_session(&store).await;
        let backend = Arc::new(StubBackend::ok());
        let orch = orchestrator(Arc::clone(&backend), Arc::clone(&store));

        orch.generate_for(session).await.unwrap();
        let second = orch.generate_for(session).await.unwrap();
        assert_matches!(second, GenerateOutcome::Cached(_));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn concurrent_requests_run_at_most_one_generation() {
        let store = Arc::new(SessionStore::new());
        let session = submitted_session(&store).await;
        let backend = Arc::new(StubBackend::slow());
        let orch = Arc::new(orchestrator(Arc::clone(&backend), Arc::clone(&store)));

        let a = {
            let orch = Arc::clone(&orch);
            tokio::spawn(async move { orch.generate_for(session).await })
        };
        let b = {
            let orch = Arc::clone(&orch);
            tokio::spawn(async move { orch.generate_for(session).await })
        };

        let (a, b) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());
        assert_eq!(backend.call_count(), 1);

        let generated = |o: &GenerateOutcome| matches!(o, GenerateOutcome::Generated(_));
        assert!(generated(&a) ^ generated(&b));
    }

    #[tokio::test]
    async fn backend_failure_settles_with_fallback() {
        let store = Arc::new(SessionStore::new());
        let session = submitted_session(&store).await;
        let orch = orchestrator(Arc::new(StubBackend::failing()), Arc::clone(&store));

        let outcome = orch.generate_for(session).await.unwrap();
        let toolkit = assert_matches!(outcome, GenerateOutcome::Generated(t) => t);

        // Fallback bundle for developer/gaming, stamped and persisted.
        assert_eq!(toolkit.work_tools[0].name, "GitHub Copilot");
        assert_eq!(toolkit.life_tools[0].name, "Discord AI");
        assert!(toolkit.specs.updated_at.is_some());

        let cached: Option<Toolkit> = store.get(session, keys::GENERATED_TOOLKIT).await;
        assert!(cached.is_some());
        assert!(orch.settled("alex-developer-gaming").await.is_some());
    }

    #[tokio::test]
    async fn progress_reports_settled_after_generation() {
        let store = Arc::new(SessionStore::new());
        let session = submitted_session(&store).await;
        let orch = orchestrator(Arc::new(StubBackend::ok()), Arc::clone(&store));

        assert!(orch.progress("alex-developer-gaming").await.is_none());
        orch.generate_for(session).await.unwrap();

        let snapshot = orch.progress("alex-developer-gaming").await.unwrap();
        assert_eq!(snapshot.progress, 100.0);
        assert!(snapshot.settled);

        // The live feed is released once the slug settles.
        assert!(orch.trackers.read().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn evicted_slug_generates_fresh() {
        let store = Arc::new(SessionStore::new());
        let session = submitted_session(&store).await;
        let backend = Arc::new(StubBackend::ok());
        let orch = orchestrator(Arc::clone(&backend), Arc::clone(&store));

        orch.generate_for(session).await.unwrap();

        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert_eq!(orch.purge_settled(Duration::from_secs(1800)).await, 1);
        assert!(orch.progress("alex-developer-gaming").await.is_none());
        assert!(orch.settled("alex-developer-gaming").await.is_none());

        // A later visitor with the same slug reaches the backend again.
        let again = orch.generate_for(session).await.unwrap();
        assert_matches!(again, GenerateOutcome::Generated(_));
        assert_eq!(backend.call_count(), 2);
    }
}

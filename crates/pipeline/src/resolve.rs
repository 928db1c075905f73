//! Toolkit resolution for the public toolkit page.
//!
//! Resolution order: the session's own cached toolkit, then any toolkit
//! settled process-wide for the slug, then the built-in demo profiles.
//! `None` means the page should render its friendly empty state.

use kitmate_core::demo;
use kitmate_core::toolkit::Toolkit;
use kitmate_session::{keys, SessionStore};
use uuid::Uuid;

use crate::orchestrator::Orchestrator;

pub async fn resolve_toolkit(
    store: &SessionStore,
    orchestrator: &Orchestrator,
    session: Option<Uuid>,
    slug: &str,
) -> Option<Toolkit> {
    if let Some(session) = session {
        let cached: Option<Toolkit> = store.get(session, keys::GENERATED_TOOLKIT).await;
        if let Some(toolkit) = cached {
            // An empty cached slug acts as a wildcard for the session.
            if toolkit.slug == slug || toolkit.slug.is_empty() {
                return Some(toolkit);
            }
        }
    }

    if let Some(toolkit) = orchestrator.settled(slug).await {
        return Some(toolkit);
    }

    demo::demo_toolkit(slug)
}

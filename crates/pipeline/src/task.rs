//! Per-slug generation latch.
//!
//! Each slug moves through at most one lifecycle: absent (never started),
//! in flight, settled. [`TaskBoard::begin`] is the only entry point and is
//! atomic, so two concurrent requests for the same slug can never both
//! start a generation.

use std::collections::HashMap;
use std::time::Duration;

use kitmate_core::toolkit::Toolkit;
use tokio::sync::RwLock;
use tokio::time::Instant;

enum TaskState {
    InFlight,
    Settled { toolkit: Toolkit, settled_at: Instant },
}

/// Outcome of attempting to start a generation.
#[derive(Debug)]
pub enum BeginOutcome {
    /// The caller owns the generation and must eventually settle it.
    Started,
    /// Another request is already generating this slug.
    InFlight,
    /// The slug settled earlier; here is its toolkit.
    Settled(Toolkit),
}

/// Tracks the generation state of every slug this process has seen.
pub struct TaskBoard {
    tasks: RwLock<HashMap<String, TaskState>>,
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBoard {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    /// Claim the generation for `slug`, or learn why it cannot be claimed.
    pub async fn begin(&self, slug: &str) -> BeginOutcome {
        let mut tasks = self.tasks.write().await;
        match tasks.get(slug) {
            Some(TaskState::InFlight) => BeginOutcome::InFlight,
            Some(TaskState::Settled { toolkit, .. }) => BeginOutcome::Settled(toolkit.clone()),
            None => {
                tasks.insert(slug.to_string(), TaskState::InFlight);
                BeginOutcome::Started
            }
        }
    }

    /// Record the finished toolkit for `slug`. The latch stays settled until
    /// [`TaskBoard::purge_settled`] ages it out.
    pub async fn settle(&self, slug: &str, toolkit: Toolkit) {
        self.tasks.write().await.insert(
            slug.to_string(),
            TaskState::Settled {
                toolkit,
                settled_at: Instant::now(),
            },
        );
    }

    /// The settled toolkit for `slug`, if generation has completed.
    pub async fn settled(&self, slug: &str) -> Option<Toolkit> {
        match self.tasks.read().await.get(slug) {
            Some(TaskState::Settled { toolkit, .. }) => Some(toolkit.clone()),
            _ => None,
        }
    }

    /// Drop settled entries older than `max_age` and return how many went.
    /// In-flight entries are never dropped; an evicted slug generates fresh
    /// on its next request.
    pub async fn purge_settled(&self, max_age: Duration) -> usize {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|_, state| match state {
            TaskState::InFlight => true,
            TaskState::Settled { settled_at, .. } => settled_at.elapsed() < max_age,
        });
        before - tasks.len()
    }

    /// Whether `slug` has a generation currently running.
    pub async fn is_in_flight(&self, slug: &str) -> bool {
        matches!(self.tasks.read().await.get(slug), Some(TaskState::InFlight))
    }
}

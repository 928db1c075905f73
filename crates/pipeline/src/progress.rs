//! In-flight generation progress feed.
//!
//! Progress and the loading message advance on independent clocks so the
//! message keeps rotating even while progress creeps. Progress ticks fast
//! to 80, then crawls toward a 90 ceiling it never crosses on its own;
//! only settling jumps it to 100.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Rotating status lines shown while a generation is in flight.
pub const LOADING_MESSAGES: [&str; 9] = [
    "Analyzing your profile...",
    "Connecting to AI engine...",
    "Scanning 2,847 AI tools...",
    "Matching work preferences...",
    "Finding tools for your hobbies...",
    "Curating weekend planners...",
    "Optimizing recommendations...",
    "Building your toolkit...",
    "Almost ready...",
];

/// Progress advances every tick: +2 below the fast ceiling, then +0.5.
const PROGRESS_TICK: Duration = Duration::from_millis(80);
/// The loading message rotates on its own, slower clock.
const MESSAGE_TICK: Duration = Duration::from_secs(1);

const FAST_CEILING: f64 = 80.0;
const CRAWL_CEILING: f64 = 90.0;

/// Point-in-time view of a generation's progress.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// 0 to 100. Reaches 100 only once settled.
    pub progress: f64,
    pub message: String,
    pub settled: bool,
}

struct Shared {
    progress: watch::Sender<f64>,
    message: watch::Sender<&'static str>,
    settled: watch::Sender<bool>,
    cancel: CancellationToken,
}

/// Live progress feed for one in-flight generation.
#[derive(Clone)]
pub struct ProgressTracker {
    shared: Arc<Shared>,
}

impl ProgressTracker {
    /// Start the two timer tasks and return the tracker.
    pub fn start() -> Self {
        let shared = Arc::new(Shared {
            progress: watch::Sender::new(0.0),
            message: watch::Sender::new(LOADING_MESSAGES[0]),
            settled: watch::Sender::new(false),
            cancel: CancellationToken::new(),
        });

        tokio::spawn(tick_progress(Arc::clone(&shared)));
        tokio::spawn(rotate_messages(Arc::clone(&shared)));

        Self { shared }
    }

    /// Finish the feed: progress jumps to 100 and the timers stop.
    pub fn settle(&self) {
        self.shared.cancel.cancel();
        let _ = self.shared.progress.send(100.0);
        let _ = self.shared.settled.send(true);
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            progress: *self.shared.progress.borrow(),
            message: self.shared.message.borrow().to_string(),
            settled: *self.shared.settled.borrow(),
        }
    }

    /// A snapshot for a generation that settled before (or without) any
    /// tracker existing.
    pub fn settled_snapshot() -> ProgressSnapshot {
        ProgressSnapshot {
            progress: 100.0,
            message: LOADING_MESSAGES[LOADING_MESSAGES.len() - 1].to_string(),
            settled: true,
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn tick_progress(shared: Arc<Shared>) {
    let mut interval = tokio::time::interval(PROGRESS_TICK);
    interval.tick().await;
    loop {
        tokio::select! {
            _ = shared.cancel.cancelled() => break,
            _ = interval.tick() => {
                let current = *shared.progress.borrow();
                let next = if current < FAST_CEILING {
                    current + 2.0
                } else {
                    (current + 0.5).min(CRAWL_CEILING)
                };
                let _ = shared.progress.send(next);
            }
        }
    }
}

async fn rotate_messages(shared: Arc<Shared>) {
    let mut interval = tokio::time::interval(MESSAGE_TICK);
    interval.tick().await;
    let mut index = 0usize;
    loop {
        tokio::select! {
            _ = shared.cancel.cancelled() => break,
            _ = interval.tick() => {
                index = (index + 1) % LOADING_MESSAGES.len();
                let _ = shared.message.send(LOADING_MESSAGES[index]);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn progress_climbs_fast_then_crawls() {
        let tracker = ProgressTracker::start();

        tokio::time::sleep(Duration::from_secs(1)).await;
        let early = tracker.snapshot();
        assert!(early.progress > 0.0);
        assert!(!early.settled);

        // Long after the fast phase, progress must sit at the ceiling.
        tokio::time::sleep(Duration::from_secs(60)).await;
        let late = tracker.snapshot();
        assert_eq!(late.progress, 90.0);
        assert!(!late.settled);
    }

    #[tokio::test(start_paused = true)]
    async fn messages_rotate_on_their_own_clock() {
        let tracker = ProgressTracker::start();
        let first = tracker.snapshot().message;

        tokio::time::sleep(Duration::from_millis(1100)).await;
        let second = tracker.snapshot().message;
        assert_ne!(first, second);

        // The rotation wraps around rather than sticking at the end.
        tokio::time::sleep(Duration::from_secs(8)).await;
        let wrapped = tracker.snapshot().message;
        assert_eq!(wrapped, first);
    }

    #[tokio::test(start_paused = true)]
    async fn settle_jumps_to_100_and_stops_timers() {
        let tracker = ProgressTracker::start();
        tokio::time::sleep(Duration::from_millis(500)).await;

        tracker.settle();
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.progress, 100.0);
        assert!(snapshot.settled);

        // No further ticks after settling.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(tracker.snapshot().progress, 100.0);
    }
}

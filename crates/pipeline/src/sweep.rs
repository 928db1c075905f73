//! Background eviction of settled generation records.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::orchestrator::Orchestrator;

/// Periodically evict aged settled slugs until `cancel` fires.
///
/// Spawned once at startup; the first tick fires after one full interval.
pub async fn run(
    orchestrator: Arc<Orchestrator>,
    sweep_interval: Duration,
    max_age: Duration,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(sweep_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    interval.tick().await; // immediate first tick, skip it

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("generation sweeper stopping");
                break;
            }
            _ = interval.tick() => {
                let dropped = orchestrator.purge_settled(max_age).await;
                if dropped > 0 {
                    tracing::info!(dropped, "evicted settled generations");
                }
            }
        }
    }
}

//! Background idle-session sweeper.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::store::SessionStore;

/// Periodically purge idle sessions until `cancel` fires.
///
/// Spawned once at startup; the first tick fires after one full interval.
pub async fn run(
    store: Arc<SessionStore>,
    sweep_interval: Duration,
    max_idle: Duration,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(sweep_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    interval.tick().await; // immediate first tick, skip it

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("session sweeper stopping");
                break;
            }
            _ = interval.tick() => {
                let dropped = store.purge_idle(max_idle).await;
                if dropped > 0 {
                    tracing::info!(dropped, "purged idle sessions");
                }
            }
        }
    }
}

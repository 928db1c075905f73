//! First-visit welcome tracking.
//!
//! Keyed by a client-generated id rather than a session id so the flag
//! survives session purges. A missing id simply reads as "not seen yet".

use std::collections::HashSet;

use tokio::sync::RwLock;

/// Tracks which client ids have already seen the welcome banner.
pub struct WelcomeLedger {
    seen: RwLock<HashSet<String>>,
}

impl Default for WelcomeLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl WelcomeLedger {
    pub fn new() -> Self {
        Self {
            seen: RwLock::new(HashSet::new()),
        }
    }

    pub async fn has_seen(&self, client_id: &str) -> bool {
        self.seen.read().await.contains(client_id)
    }

    /// Mark the banner as seen. Idempotent.
    pub async fn mark_seen(&self, client_id: &str) {
        self.seen.write().await.insert(client_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unseen_then_seen() {
        let ledger = WelcomeLedger::new();
        assert!(!ledger.has_seen("client-1").await);

        ledger.mark_seen("client-1").await;
        assert!(ledger.has_seen("client-1").await);
        assert!(!ledger.has_seen("client-2").await);
    }

    #[tokio::test]
    async fn mark_seen_is_idempotent() {
        let ledger = WelcomeLedger::new();
        ledger.mark_seen("client-1").await;
        ledger.mark_seen("client-1").await;
        assert!(ledger.has_seen("client-1").await);
    }
}

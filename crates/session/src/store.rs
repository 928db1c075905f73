//! In-memory session store.
//!
//! Each session is a flat map of string keys to JSON values plus a
//! last-access timestamp. All accessors are soft-failing: a missing session,
//! missing key, or undecodable value yields `None` with a warning rather
//! than an error, matching the contract that cached state is an
//! optimization, never a source of truth.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

struct SessionEntry {
    values: HashMap<String, serde_json::Value>,
    last_access: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            values: HashMap::new(),
            last_access: Instant::now(),
        }
    }
}

/// Keyed JSON storage scoped per session id.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Allocate a fresh session id.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, SessionEntry::new());
        id
    }

    /// Whether the session currently exists.
    pub async fn exists(&self, session: Uuid) -> bool {
        self.sessions.read().await.contains_key(&session)
    }

    /// Store `value` under `key`. Creates the session if it is unknown, so a
    /// purged-but-active visitor keeps working. Serialization failures are
    /// logged and swallowed.
    pub async fn put<T: Serialize>(&self, session: Uuid, key: &str, value: &T) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%session, key, %err, "failed to serialize session value");
                return;
            }
        };
        let mut sessions = self.sessions.write().await;
        let entry = sessions.entry(session).or_insert_with(SessionEntry::new);
        entry.last_access = Instant::now();
        entry.values.insert(key.to_string(), json);
    }

    /// Read and decode the value under `key`, refreshing the idle clock.
    pub async fn get<T: DeserializeOwned>(&self, session: Uuid, key: &str) -> Option<T> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&session)?;
        entry.last_access = Instant::now();
        let json = entry.values.get(key)?.clone();
        drop(sessions);
        decode(session, key, json)
    }

    /// Read-and-remove in one step, for one-shot handoff keys.
    pub async fn take<T: DeserializeOwned>(&self, session: Uuid, key: &str) -> Option<T> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&session)?;
        entry.last_access = Instant::now();
        let json = entry.values.remove(key)?;
        drop(sessions);
        decode(session, key, json)
    }

    /// Remove the value under `key`, if any.
    pub async fn remove(&self, session: Uuid, key: &str) {
        let mut sessions = self.sessions.write().await;
        if let Some(entry) = sessions.get_mut(&session) {
            entry.last_access = Instant::now();
            entry.values.remove(key);
        }
    }

    /// Drop every session idle for longer than `max_idle`. Returns the number
    /// of sessions dropped.
    pub async fn purge_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_access.elapsed() <= max_idle);
        before - sessions.len()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn decode<T: DeserializeOwned>(session: Uuid, key: &str, json: serde_json::Value) -> Option<T> {
    match serde_json::from_value(json) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(%session, key, %err, "undecodable session value, treating as absent");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

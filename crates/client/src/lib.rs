//! HTTP client for the SmartMatch matching backend.
//!
//! Wraps the backend's REST endpoints (generate, parse, smart-generate,
//! suggest, catalogs, health) using [`reqwest`]. The [`MatchBackend`] trait
//! is the seam the orchestrator depends on, so tests can substitute stubs
//! for the real service.

pub mod api;
pub mod backend;
pub mod error;
pub mod types;

pub use api::MatchApi;
pub use backend::MatchBackend;
pub use error::MatchApiError;

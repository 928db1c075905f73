//! Generation pipeline: orchestration, progress reporting, and toolkit
//! resolution.
//!
//! The orchestrator sits between the session store and the matching
//! backend. It guarantees at most one generation per toolkit slug, degrades
//! to locally synthesized toolkits when the backend fails, and exposes a
//! pollable progress feed while a generation is in flight.

pub mod orchestrator;
pub mod progress;
pub mod resolve;
pub mod sweep;
pub mod task;

pub use orchestrator::{GenerateOutcome, Orchestrator, PipelineError};
pub use progress::{ProgressSnapshot, ProgressTracker};

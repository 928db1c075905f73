//! Per-session state for the kitmate service.
//!
//! Sessions mirror a browser tab: a keyed JSON store scoped to one visitor,
//! dropped wholesale when the visitor goes idle. Storage failures degrade
//! silently (logged, never raised) so a broken cache entry can never take
//! down a request.

pub mod keys;
pub mod store;
pub mod sweeper;
pub mod welcome;

pub use store::SessionStore;
pub use welcome::WelcomeLedger;

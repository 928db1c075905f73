//! Domain models and pure logic for the kitmate toolkit generator.
//!
//! Everything in this crate is side-effect free: catalogs, the onboarding
//! wizard state machine, toolkit types, the local fallback generator, and
//! the demo records. I/O (HTTP, session storage) lives in sibling crates.

pub mod catalog;
pub mod demo;
pub mod error;
pub mod fallback;
pub mod onboarding;
pub mod toolkit;

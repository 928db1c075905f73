pub mod catalog;
pub mod generation;
pub mod onboarding;
pub mod session;
pub mod toolkit;
pub mod welcome;

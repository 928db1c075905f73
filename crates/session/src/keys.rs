//! Well-known session storage keys.

/// Normalized onboarding submission, written once on SUBMIT.
pub const ONBOARDING_DATA: &str = "onboarding_data";

/// The session's generated toolkit. Overwritten by each new generation.
pub const GENERATED_TOOLKIT: &str = "generated_toolkit";

/// Backend-parsed intent handed from the persona flow to the wizard.
/// One-shot: consumed with `take` on wizard entry.
pub const PARSED_INTENT: &str = "parsed_intent";

/// Hobby chosen before onboarding started. One-shot, like [`PARSED_INTENT`].
pub const PRESELECTED_HOBBY: &str = "preselected_hobby";

/// Raw persona sentence the visitor typed on the landing page.
pub const PERSONA_INPUT: &str = "persona_input";

/// Wizard seeds for a quick-mode flow, written when wizard entry lands on
/// the name-only step. One-shot: consumed by SUBMIT, whose pre-seeded
/// profession and hobby are accepted without catalog re-validation.
pub const QUICK_SEED: &str = "quick_seed";

//! Onboarding wizard state machine.
//!
//! Collects name, profession, and hobbies over two steps (or a single
//! name-only step when upstream parsing already supplied profession and
//! hobby), validates step-completion preconditions, and emits a normalized
//! [`OnboardingSubmission`] on submit. Invalid transitions are refused
//! rather than raised -- the UI renders them as a disabled button.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::CoreError;

/// Hobby id used when neither a preset hobby nor a custom hobby is present.
pub const FALLBACK_HOBBY: &str = "general";

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// Position in the onboarding wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Step 1: collect name and profession.
    ProfessionAndName,
    /// Step 2: collect hobbies (preset and/or custom).
    Hobbies,
    /// Quick mode: profession and hobby were pre-seeded; only a name is needed.
    QuickNameOnly,
}

impl WizardStep {
    /// 1-based step number as shown in the UI.
    pub fn to_number(self) -> u8 {
        match self {
            Self::ProfessionAndName => 1,
            Self::Hobbies => 2,
            Self::QuickNameOnly => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Query-parameter seeds that position the wizard on entry.
///
/// `mode=quick` together with both `profession` and `hobby` enters
/// [`WizardStep::QuickNameOnly`]; a `profession` alone skips straight to the
/// hobby step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardSeed {
    pub mode: Option<String>,
    pub profession: Option<String>,
    pub hobby: Option<String>,
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

/// Mutable wizard state for one onboarding flow.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    name: String,
    profession: String,
    selected_hobbies: Vec<String>,
    custom_hobby: String,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Fresh wizard at step 1 with no input.
    pub fn new() -> Self {
        Self {
            step: WizardStep::ProfessionAndName,
            name: String::new(),
            profession: String::new(),
            selected_hobbies: Vec::new(),
            custom_hobby: String::new(),
        }
    }

    /// Wizard positioned from URL query seeds.
    pub fn seeded(seed: &WizardSeed) -> Self {
        let mut wizard = Self::new();

        if let Some(profession) = &seed.profession {
            wizard.profession = profession.clone();
        }
        if let Some(hobby) = &seed.hobby {
            wizard.selected_hobbies = vec![hobby.clone()];
        }

        let quick = seed.mode.as_deref() == Some("quick")
            && seed.profession.is_some()
            && seed.hobby.is_some();

        wizard.step = if quick {
            WizardStep::QuickNameOnly
        } else if seed.profession.is_some() {
            WizardStep::Hobbies
        } else {
            WizardStep::ProfessionAndName
        };
        wizard
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn profession(&self) -> &str {
        &self.profession
    }

    pub fn selected_hobbies(&self) -> &[String] {
        &self.selected_hobbies
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_profession(&mut self, profession: impl Into<String>) {
        self.profession = profession.into();
    }

    pub fn set_custom_hobby(&mut self, hobby: impl Into<String>) {
        self.custom_hobby = hobby.into();
    }

    /// Toggle a preset hobby on or off, preserving selection order.
    pub fn toggle_hobby(&mut self, id: &str) {
        if let Some(pos) = self.selected_hobbies.iter().position(|h| h == id) {
            self.selected_hobbies.remove(pos);
        } else {
            self.selected_hobbies.push(id.to_string());
        }
    }

    /// Whether step 1 may advance: non-empty name AND a valid profession id.
    pub fn can_advance(&self) -> bool {
        !self.name.trim().is_empty() && catalog::is_valid_profession(&self.profession)
    }

    /// Advance from step 1 to step 2. Refused (returns `false`, state
    /// unchanged) if the preconditions are not met or the wizard is not on
    /// step 1.
    pub fn advance(&mut self) -> bool {
        if self.step != WizardStep::ProfessionAndName || !self.can_advance() {
            return false;
        }
        self.step = WizardStep::Hobbies;
        true
    }

    /// Return from the hobby step to step 1.
    pub fn back(&mut self) {
        if self.step == WizardStep::Hobbies {
            self.step = WizardStep::ProfessionAndName;
        }
    }

    /// Whether the terminal SUBMIT action is currently permitted.
    pub fn can_submit(&self) -> bool {
        let has_name = !self.name.trim().is_empty();
        match self.step {
            WizardStep::ProfessionAndName => false,
            WizardStep::Hobbies => {
                has_name
                    && (!self.selected_hobbies.is_empty() || !self.custom_hobby.trim().is_empty())
            }
            // Profession and hobby were pre-seeded upstream and are not
            // re-validated here.
            WizardStep::QuickNameOnly => has_name,
        }
    }

    /// Produce the normalized submission record.
    pub fn submit(&self) -> Result<OnboardingSubmission, CoreError> {
        if !self.can_submit() {
            return Err(CoreError::Validation(
                "Onboarding is incomplete: a name and at least one hobby are required".to_string(),
            ));
        }
        Ok(OnboardingSubmission::build(
            &self.name,
            &self.profession,
            &self.selected_hobbies,
            &self.custom_hobby,
        ))
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Normalized result of a completed onboarding flow.
///
/// Created exactly once per flow; consumed once by the generation
/// orchestrator; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingSubmission {
    pub name: String,
    /// Profession id, e.g. `"developer"`.
    pub profession: String,
    /// Denormalized display label, e.g. `"Software Developer"`.
    pub profession_label: String,
    /// Ordered hobby ids; never empty.
    pub hobbies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_hobby: Option<String>,
    pub slug: String,
}

impl OnboardingSubmission {
    fn build(name: &str, profession: &str, selected: &[String], custom: &str) -> Self {
        let custom = custom.trim();
        let primary = primary_hobby(selected, custom);

        let mut hobbies: Vec<String> = selected.to_vec();
        if !custom.is_empty() {
            hobbies.push(catalog::slugify(custom));
        }
        if hobbies.is_empty() {
            hobbies.push(primary.clone());
        }

        Self {
            name: name.trim().to_string(),
            profession: profession.to_string(),
            profession_label: catalog::profession_label(profession),
            hobbies,
            custom_hobby: (!custom.is_empty()).then(|| custom.to_string()),
            slug: derive_slug(name, profession, &primary),
        }
    }

    /// The hobby the generation request is keyed on: first selected hobby,
    /// else the (slugified) custom hobby, else [`FALLBACK_HOBBY`].
    pub fn primary_hobby(&self) -> &str {
        self.hobbies
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_HOBBY)
    }
}

/// Select the primary hobby from preset selections and custom free text.
pub fn primary_hobby(selected: &[String], custom: &str) -> String {
    if let Some(first) = selected.first() {
        return first.clone();
    }
    let custom = catalog::slugify(custom);
    if custom.is_empty() {
        FALLBACK_HOBBY.to_string()
    } else {
        custom
    }
}

/// Derive the toolkit slug: hyphenated lowercase name, profession id, and
/// primary hobby, joined by hyphens.
///
/// Pure function of its inputs. Collisions between distinct users with the
/// same name/profession/hobby are not detected; the session cache is
/// last-write-wins and durable uniqueness belongs to the backend.
pub fn derive_slug(name: &str, profession: &str, primary_hobby: &str) -> String {
    format!("{}-{}-{}", catalog::slugify(name), profession, primary_hobby)
}

// ---------------------------------------------------------------------------
// Persona free-text seeding
// ---------------------------------------------------------------------------

/// Extract a profession from a raw persona sentence such as
/// `"I am a product manager who loves hiking"`.
///
/// Matches the catalog entry whose label or id contains the captured phrase.
/// Returns `None` when nothing matches; the wizard then starts unseeded.
pub fn profession_from_persona(input: &str) -> Option<&'static catalog::CatalogEntry> {
    let re = Regex::new(r"(?i)\bi\s*(?:'?m|am)\s+an?\s+([a-z][a-z -]*?)(?:\s+(?:who|and|that)\b|[,.]|$)")
        .ok()?;
    let captured = re.captures(input)?.get(1)?.as_str().trim().to_lowercase();
    if captured.is_empty() {
        return None;
    }
    catalog::PROFESSIONS.iter().find(|p| {
        p.label.to_lowercase().contains(&captured) || p.id.contains(&catalog::slugify(&captured))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

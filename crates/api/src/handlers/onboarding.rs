//! Onboarding flow handlers.
//!
//! The wizard itself is pure logic in `kitmate_core`; these handlers feed it
//! from query parameters, one-shot session handoffs, and request bodies, and
//! persist the resulting submission.

use axum::extract::{Query, State};
use axum::Json;
use kitmate_client::types::ParsedIntent;
use kitmate_core::error::CoreError;
use kitmate_core::onboarding::{self, OnboardingSubmission, Wizard, WizardSeed, WizardStep};
use kitmate_session::keys;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::session::SessionKey;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Wizard entry
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct StartQuery {
    pub mode: Option<String>,
    pub profession: Option<String>,
    pub hobby: Option<String>,
}

/// Initial wizard position plus any prefilled fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub step: WizardStep,
    pub step_number: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    pub hobbies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// GET /onboarding/start -- position the wizard for this session.
///
/// Seeding precedence: a parsed intent stored by `/onboarding/parse` wins
/// over query parameters; a preselected hobby fills in only when no hobby
/// was given. Both handoffs are one-shot and consumed here.
pub async fn start(
    SessionKey(session): SessionKey,
    State(state): State<AppState>,
    Query(query): Query<StartQuery>,
) -> Json<DataResponse<WizardView>> {
    let intent: Option<ParsedIntent> = state.store.take(session, keys::PARSED_INTENT).await;
    let preselected: Option<String> = state.store.take(session, keys::PRESELECTED_HOBBY).await;

    let (seed, name) = match intent {
        Some(intent) => (
            WizardSeed {
                mode: Some("quick".into()),
                profession: Some(intent.profession),
                hobby: Some(intent.hobby),
            },
            intent.name,
        ),
        None => (
            WizardSeed {
                mode: query.mode,
                profession: query.profession,
                hobby: query.hobby.or(preselected),
            },
            None,
        ),
    };

    let wizard = Wizard::seeded(&seed);

    // Remember quick-mode seeds so SUBMIT can accept a name-only flow;
    // entering the normal flow cancels any earlier quick handoff.
    if wizard.step() == WizardStep::QuickNameOnly {
        state.store.put(session, keys::QUICK_SEED, &seed).await;
    } else {
        state.store.remove(session, keys::QUICK_SEED).await;
    }

    let view = WizardView {
        step: wizard.step(),
        step_number: wizard.step().to_number(),
        profession: (!wizard.profession().is_empty()).then(|| wizard.profession().to_string()),
        hobbies: wizard.selected_hobbies().to_vec(),
        name,
    };
    Json(DataResponse { data: view })
}

// ---------------------------------------------------------------------------
// Persona free text
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct PersonaInput {
    #[validate(length(min = 1, max = 500))]
    pub input: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaSeed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession_label: Option<String>,
}

/// POST /onboarding/persona -- remember the visitor's persona sentence and
/// try a local profession match. Never fails on unmatchable input; the
/// wizard just starts unseeded.
pub async fn persona(
    SessionKey(session): SessionKey,
    State(state): State<AppState>,
    Json(body): Json<PersonaInput>,
) -> AppResult<Json<DataResponse<PersonaSeed>>> {
    body.validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    state.store.put(session, keys::PERSONA_INPUT, &body.input).await;

    let matched = onboarding::profession_from_persona(&body.input);
    let seed = PersonaSeed {
        profession: matched.map(|p| p.id.to_string()),
        profession_label: matched.map(|p| p.label.to_string()),
    };
    Ok(Json(DataResponse { data: seed }))
}

// ---------------------------------------------------------------------------
// Backend parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct ParseInput {
    #[validate(length(min = 1, max = 500))]
    pub input: String,
}

/// POST /onboarding/parse -- ask the matching backend to extract profession
/// and hobby from free text. The result is stored for one-shot pickup by
/// `/onboarding/start`. Backend failures surface to the caller.
pub async fn parse(
    SessionKey(session): SessionKey,
    State(state): State<AppState>,
    Json(body): Json<ParseInput>,
) -> AppResult<Json<DataResponse<ParsedIntent>>> {
    body.validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let intent = state.backend.parse(&body.input).await?;
    state.store.put(session, keys::PARSED_INTENT, &intent).await;
    Ok(Json(DataResponse { data: intent }))
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBody {
    pub name: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub custom_hobby: Option<String>,
}

/// POST /onboarding/submit -- run the wizard to completion and persist the
/// normalized submission.
///
/// A quick-mode flow (seeded by `/onboarding/start`) needs only a name: the
/// pre-seeded profession and hobby are taken as-is, without catalog
/// re-validation. The manual flow validates the profession on advance.
pub async fn submit(
    SessionKey(session): SessionKey,
    State(state): State<AppState>,
    Json(body): Json<SubmitBody>,
) -> AppResult<Json<DataResponse<OnboardingSubmission>>> {
    let quick: Option<WizardSeed> = state.store.take(session, keys::QUICK_SEED).await;

    let mut wizard = match quick {
        Some(seed) => {
            // Body values win where present; the stored seed guarantees a
            // profession and hobby either way, so this lands on the
            // name-only step.
            let mut wizard = Wizard::seeded(&WizardSeed {
                mode: Some("quick".to_string()),
                profession: Some(body.profession.clone())
                    .filter(|p| !p.is_empty())
                    .or(seed.profession),
                hobby: body.hobbies.first().cloned().or(seed.hobby),
            });
            for hobby in body.hobbies.iter().skip(1) {
                wizard.toggle_hobby(hobby);
            }
            wizard
        }
        None => {
            let mut wizard = Wizard::new();
            wizard.set_name(&body.name);
            wizard.set_profession(&body.profession);
            if !wizard.advance() {
                return Err(CoreError::Validation(
                    "A name and a valid profession are required".to_string(),
                )
                .into());
            }
            for hobby in &body.hobbies {
                wizard.toggle_hobby(hobby);
            }
            wizard
        }
    };

    wizard.set_name(&body.name);
    if let Some(custom) = &body.custom_hobby {
        wizard.set_custom_hobby(custom.clone());
    }

    let submission = wizard.submit()?;
    state
        .store
        .put(session, keys::ONBOARDING_DATA, &submission)
        .await;
    tracing::info!(slug = %submission.slug, "onboarding submitted");
    Ok(Json(DataResponse { data: submission }))
}

//! Wire types for the matching-backend REST API.

use kitmate_core::toolkit::{LifeTool, ToolkitSpecs, WorkTool};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub profession: String,
    pub hobby: String,
    pub name: String,
    /// Ask the backend to run its AI matcher rather than static curation.
    pub use_ai: bool,
}

/// A generated toolkit as returned by the backend.
///
/// Narrower than the presentation-layer toolkit: the derived display fields
/// (FAQ, related professions, work-context heading) are added locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolkitResponse {
    pub id: String,
    pub slug: String,
    pub user_name: String,
    pub profession: String,
    pub profession_slug: String,
    pub life_context: String,
    pub work_tools: Vec<WorkTool>,
    pub life_tools: Vec<LifeTool>,
    pub specs: ToolkitSpecs,
    pub description: String,
    pub long_description: String,
    pub created_at: String,
}

/// Result of `POST /api/parse`: profession and hobby extracted from a free
/// text persona sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIntent {
    pub profession: String,
    pub profession_label: String,
    pub hobby: String,
    pub hobby_label: String,
    pub name: Option<String>,
    pub confidence: f64,
}

/// One catalog option as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuggestResponse {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfessionsResponse {
    #[serde(default)]
    pub professions: Vec<CatalogItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HobbiesResponse {
    #[serde(default)]
    pub hobbies: Vec<CatalogItem>,
}

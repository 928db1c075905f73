//! Toolkit data model.
//!
//! A [`Toolkit`] is the generated artifact handed to the presentation layer:
//! work tools, life tools, aggregate specs, and the derived display fields
//! (FAQ, related professions). Field names serialize in camelCase because
//! the wire contract with the matching backend and the frontend is camelCase.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

/// A work-mode tool recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkTool {
    pub name: String,
    /// Visual accent: a hex color used when no logo image is available.
    pub logo: String,
    /// Optional logo image URL (API-sourced tools may carry one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Star rating, 1-5.
    pub rating: u8,
    pub description: String,
    pub cta_text: String,
    pub category: String,
    /// Monthly price in USD; 0 = free.
    pub price: f64,
    /// Tool website for redirection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A life-mode (hobby) tool recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeTool {
    pub name: String,
    pub description: String,
    pub background_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// Specs
// ---------------------------------------------------------------------------

/// Aggregate view over a toolkit's tools. Derived, never stored on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolkitSpecs {
    pub total_tools: u32,
    /// Sum of paid work-tool prices. Life tools are assumed free.
    pub monthly_cost: f64,
    pub primary_goal: String,
    pub free_tools: u32,
    pub paid_tools: u32,
    /// Display string, e.g. `"Dec 2025"`. Absent on raw API responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ToolkitSpecs {
    /// Recompute specs from a tool list.
    ///
    /// `bonus` is added to the tool count only; it does not affect cost or
    /// the free/paid breakdown.
    pub fn compute(work_tools: &[WorkTool], life_tools: &[LifeTool], bonus: u32) -> Self {
        let free_work = work_tools.iter().filter(|t| t.price == 0.0).count() as u32;
        let paid_work = work_tools.iter().filter(|t| t.price > 0.0).count() as u32;
        Self {
            total_tools: work_tools.len() as u32 + life_tools.len() as u32 + bonus,
            monthly_cost: work_tools.iter().map(|t| t.price).sum(),
            primary_goal: "Productivity".to_string(),
            free_tools: free_work + life_tools.len() as u32,
            paid_tools: paid_work,
            updated_at: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Display extras
// ---------------------------------------------------------------------------

/// One FAQ accordion entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A related-profession pointer shown under the toolkit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedProfession {
    pub name: String,
    pub slug: String,
}

// ---------------------------------------------------------------------------
// Toolkit
// ---------------------------------------------------------------------------

/// The generated toolkit artifact.
///
/// Created once per generation request (API-sourced or fallback) and cached
/// in the session store under a single well-known key; retrieved by matching
/// [`slug`](Self::slug) against the requested route parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolkit {
    pub user_name: String,
    pub slug: String,
    /// Display label, e.g. `"Product Manager"`.
    pub profession: String,
    /// Profession id, e.g. `"product-manager"`.
    pub profession_slug: String,
    /// Work-mode section heading, e.g. `"Product Manager Workflow"`.
    pub work_context: String,
    /// Life-mode section heading, e.g. `"Hiking"`.
    pub life_context: String,
    pub description: String,
    pub long_description: String,
    pub work_tools: Vec<WorkTool>,
    pub life_tools: Vec<LifeTool>,
    pub specs: ToolkitSpecs,
    pub faq: Vec<FaqEntry>,
    pub related_professions: Vec<RelatedProfession>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn work(price: f64) -> WorkTool {
        WorkTool {
            name: "Tool".into(),
            logo: "#000000".into(),
            logo_url: None,
            rating: 5,
            description: "desc".into(),
            cta_text: "Try Free".into(),
            category: "Misc".into(),
            price,
            url: None,
        }
    }

    fn life() -> LifeTool {
        LifeTool {
            name: "App".into(),
            description: "desc".into(),
            background_image: "https://example.com/bg.jpg".into(),
            url: None,
        }
    }

    #[test]
    fn specs_compute_counts_and_cost() {
        let work_tools = vec![work(0.0), work(10.0), work(20.0)];
        let life_tools = vec![life(), life()];

        let specs = ToolkitSpecs::compute(&work_tools, &life_tools, 0);
        assert_eq!(specs.total_tools, 5);
        assert_eq!(specs.monthly_cost, 30.0);
        assert_eq!(specs.free_tools, 3); // 1 free work tool + 2 life tools
        assert_eq!(specs.paid_tools, 2);
        assert_eq!(specs.primary_goal, "Productivity");
    }

    #[test]
    fn specs_bonus_only_inflates_total() {
        let work_tools = vec![work(5.0)];
        let life_tools = vec![life()];

        let plain = ToolkitSpecs::compute(&work_tools, &life_tools, 0);
        let bonused = ToolkitSpecs::compute(&work_tools, &life_tools, 6);
        assert_eq!(bonused.total_tools, plain.total_tools + 6);
        assert_eq!(bonused.monthly_cost, plain.monthly_cost);
        assert_eq!(bonused.free_tools, plain.free_tools);
        assert_eq!(bonused.paid_tools, plain.paid_tools);
    }

    #[test]
    fn specs_monthly_cost_ignores_life_tools() {
        let specs = ToolkitSpecs::compute(&[], &[life(), life(), life()], 0);
        assert_eq!(specs.monthly_cost, 0.0);
        assert_eq!(specs.free_tools, 3);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let specs = ToolkitSpecs::compute(&[work(10.0)], &[], 0);
        let json = serde_json::to_value(&specs).unwrap();
        assert!(json.get("totalTools").is_some());
        assert!(json.get("monthlyCost").is_some());
        assert!(json.get("primaryGoal").is_some());
        // updated_at is None and must be omitted, not null.
        assert!(json.get("updatedAt").is_none());
    }
}

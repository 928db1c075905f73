//! Fixed profession and hobby catalogs.
//!
//! Both enumerations are defined at build time and never change at runtime.
//! Users may additionally supply a free-text custom hobby, which is slugified
//! and treated like any other hobby id downstream.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Catalog entries
// ---------------------------------------------------------------------------

/// One selectable catalog option (profession or hobby).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    /// Stable identifier used in slugs and API requests.
    pub id: &'static str,
    /// Human-readable display label.
    pub label: &'static str,
    /// Icon token for the frontend (Material Symbols name).
    pub icon: &'static str,
}

/// The fixed profession catalog.
pub const PROFESSIONS: &[CatalogEntry] = &[
    CatalogEntry { id: "product-manager", label: "Product Manager", icon: "inventory_2" },
    CatalogEntry { id: "developer", label: "Software Developer", icon: "code" },
    CatalogEntry { id: "designer", label: "UX Designer", icon: "palette" },
    CatalogEntry { id: "marketer", label: "Marketer", icon: "campaign" },
    CatalogEntry { id: "writer", label: "Content Writer", icon: "edit_note" },
    CatalogEntry { id: "student", label: "Student", icon: "school" },
    CatalogEntry { id: "entrepreneur", label: "Entrepreneur", icon: "rocket_launch" },
    CatalogEntry { id: "data-scientist", label: "Data Scientist", icon: "analytics" },
    CatalogEntry { id: "sales", label: "Sales Rep", icon: "handshake" },
    CatalogEntry { id: "hr-manager", label: "HR Manager", icon: "groups" },
    CatalogEntry { id: "financial-analyst", label: "Finance", icon: "trending_up" },
    CatalogEntry { id: "customer-support", label: "Support", icon: "support_agent" },
    CatalogEntry { id: "consultant", label: "Consultant", icon: "business_center" },
    CatalogEntry { id: "researcher", label: "Researcher", icon: "science" },
    CatalogEntry { id: "teacher", label: "Teacher", icon: "cast_for_education" },
    CatalogEntry { id: "other", label: "Other", icon: "more_horiz" },
];

/// The fixed preset hobby catalog. Custom free-text hobbies extend this.
pub const HOBBIES: &[CatalogEntry] = &[
    CatalogEntry { id: "hiking", label: "Hiking", icon: "hiking" },
    CatalogEntry { id: "gaming", label: "Gaming", icon: "stadia_controller" },
    CatalogEntry { id: "reading", label: "Reading", icon: "book" },
    CatalogEntry { id: "coding", label: "Coding", icon: "code_blocks" },
    CatalogEntry { id: "cooking", label: "Cooking", icon: "restaurant_menu" },
    CatalogEntry { id: "traveling", label: "Traveling", icon: "flight_takeoff" },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Look up a profession by id.
pub fn profession(id: &str) -> Option<&'static CatalogEntry> {
    PROFESSIONS.iter().find(|p| p.id == id)
}

/// Look up a preset hobby by id.
pub fn hobby(id: &str) -> Option<&'static CatalogEntry> {
    HOBBIES.iter().find(|h| h.id == id)
}

/// Whether `id` names a valid profession.
pub fn is_valid_profession(id: &str) -> bool {
    profession(id).is_some()
}

/// Display label for a profession id, falling back to the raw id for
/// unknown values (the id is still readable, e.g. `"astronaut"`).
pub fn profession_label(id: &str) -> String {
    profession(id).map_or_else(|| id.to_string(), |p| p.label.to_string())
}

/// Display label for a hobby id. Preset hobbies use their catalog label;
/// custom hobbies get their first letter capitalized.
pub fn hobby_label(id: &str) -> String {
    match hobby(id) {
        Some(h) => h.label.to_string(),
        None => capitalize(id),
    }
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

/// Lowercase and replace whitespace runs with single hyphens.
///
/// Used for custom hobbies and for the name component of toolkit slugs.
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Capitalize the first character of a string.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(PROFESSIONS.len(), 16);
        assert_eq!(HOBBIES.len(), 6);
    }

    #[test]
    fn profession_ids_are_unique() {
        for (i, a) in PROFESSIONS.iter().enumerate() {
            for b in &PROFESSIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn profession_lookup() {
        assert_eq!(profession("developer").unwrap().label, "Software Developer");
        assert!(profession("astronaut").is_none());
    }

    #[test]
    fn profession_label_falls_back_to_id() {
        assert_eq!(profession_label("designer"), "UX Designer");
        assert_eq!(profession_label("astronaut"), "astronaut");
    }

    #[test]
    fn hobby_label_capitalizes_custom() {
        assert_eq!(hobby_label("hiking"), "Hiking");
        assert_eq!(hobby_label("pottery"), "Pottery");
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Kimi"), "kimi");
        assert_eq!(slugify("Mary  Jane Watson"), "mary-jane-watson");
        assert_eq!(slugify("  Urban Sketching "), "urban-sketching");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("gaming"), "Gaming");
        assert_eq!(capitalize("électronique"), "Électronique");
    }
}

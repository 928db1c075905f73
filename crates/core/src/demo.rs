//! Built-in demo toolkits.
//!
//! A small set of canned profiles served when a requested slug has no
//! session-cached toolkit. Their tool lists come from the fallback bundles;
//! the headings and descriptions are hand-written per profile.

use crate::fallback;
use crate::toolkit::{Toolkit, ToolkitSpecs};

struct DemoRecord {
    slug: &'static str,
    user_name: &'static str,
    profession: &'static str,
    profession_slug: &'static str,
    work_context: &'static str,
    life_context: &'static str,
    description: &'static str,
    hobby: &'static str,
}

const DEMO_TOOLKITS: &[DemoRecord] = &[
    DemoRecord {
        slug: "kimi-pm-hiker",
        user_name: "Kimi",
        profession: "Product Manager",
        profession_slug: "product-manager",
        work_context: "SaaS Management",
        life_context: "Outdoor Adventure",
        description: "A personalized AI toolkit for Product Managers who enjoy hiking.",
        hobby: "hiking",
    },
    DemoRecord {
        slug: "alex-developer-gaming",
        user_name: "Alex",
        profession: "Software Developer",
        profession_slug: "developer",
        work_context: "Code & Debug",
        life_context: "Gaming",
        description: "A personalized AI toolkit for Developers who enjoy gaming.",
        hobby: "gaming",
    },
    DemoRecord {
        slug: "sarah-designer-photography",
        user_name: "Sarah",
        profession: "UX Designer",
        profession_slug: "designer",
        work_context: "Design & Prototype",
        life_context: "Photography",
        description: "A personalized AI toolkit for Designers who enjoy photography.",
        // No photography bundle exists; the traveling tools fit the theme.
        hobby: "traveling",
    },
    DemoRecord {
        slug: "mike-marketer-cooking",
        user_name: "Mike",
        profession: "Marketer",
        profession_slug: "marketer",
        work_context: "Content & SEO",
        life_context: "Cooking",
        description: "A personalized AI toolkit for Marketers who enjoy cooking.",
        hobby: "cooking",
    },
];

/// Slugs of all built-in demo profiles.
pub fn demo_slugs() -> impl Iterator<Item = &'static str> {
    DEMO_TOOLKITS.iter().map(|d| d.slug)
}

/// Materialize the demo toolkit for `slug`, if one exists.
pub fn demo_toolkit(slug: &str) -> Option<Toolkit> {
    let record = DEMO_TOOLKITS.iter().find(|d| d.slug == slug)?;

    let work_tools = fallback::work_tools_for(record.profession_slug);
    let life_tools = fallback::life_tools_for(record.hobby);

    let mut specs = ToolkitSpecs::compute(&work_tools, &life_tools, fallback::CATALOG_BONUS_TOOLS);
    specs.updated_at = Some(fallback::display_updated_at());

    Some(Toolkit {
        user_name: record.user_name.to_string(),
        slug: record.slug.to_string(),
        profession: record.profession.to_string(),
        profession_slug: record.profession_slug.to_string(),
        work_context: record.work_context.to_string(),
        life_context: record.life_context.to_string(),
        description: record.description.to_string(),
        long_description: format!(
            "This AI toolkit is specifically designed for {}s who enjoy {} activities. The Work \
             Mode section includes tools optimized for your daily workflow, while the Life Mode \
             section features AI-powered apps perfect for your hobbies and interests.",
            record.profession,
            record.life_context.to_lowercase()
        ),
        faq: fallback::faq_entries(record.profession, record.life_context),
        related_professions: fallback::related_professions(),
        work_tools,
        life_tools,
        specs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_demo_profiles_exist() {
        assert_eq!(demo_slugs().count(), 4);
    }

    #[test]
    fn kimi_demo_profile() {
        let toolkit = demo_toolkit("kimi-pm-hiker").unwrap();
        assert_eq!(toolkit.user_name, "Kimi");
        assert_eq!(toolkit.profession, "Product Manager");
        assert_eq!(toolkit.profession_slug, "product-manager");
        assert_eq!(toolkit.work_context, "SaaS Management");
        assert_eq!(toolkit.life_context, "Outdoor Adventure");
        assert_eq!(toolkit.work_tools[0].name, "Jira AI");
        assert_eq!(toolkit.life_tools[0].name, "AllTrails AI");
    }

    #[test]
    fn photography_profile_borrows_traveling_tools() {
        let toolkit = demo_toolkit("sarah-designer-photography").unwrap();
        assert_eq!(toolkit.life_context, "Photography");
        assert_eq!(toolkit.life_tools[0].name, "TripIt AI");
    }

    #[test]
    fn unknown_slug_yields_none() {
        assert!(demo_toolkit("nobody-nothing-nowhere").is_none());
    }
}

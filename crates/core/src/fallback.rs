//! Local fallback toolkit synthesis.
//!
//! When the matching backend is unreachable or errors, the orchestrator
//! synthesizes a toolkit from these curated bundles instead of failing the
//! flow. Work bundles are keyed by profession id, life bundles by hobby id;
//! unknown keys fall back to the default bundle so every submission yields
//! a complete toolkit.

use chrono::Utc;

use crate::catalog;
use crate::toolkit::{FaqEntry, LifeTool, RelatedProfession, Toolkit, ToolkitSpecs, WorkTool};

/// Extra catalog tools advertised beyond the curated lists. Counted in
/// `specs.totalTools` only; fallback path only.
pub const CATALOG_BONUS_TOOLS: u32 = 6;

const DEFAULT_PROFESSION: &str = "product-manager";
const DEFAULT_HOBBY: &str = "hiking";

// ---------------------------------------------------------------------------
// Seed tables
// ---------------------------------------------------------------------------

struct WorkSeed {
    name: &'static str,
    logo: &'static str,
    rating: u8,
    description: &'static str,
    cta_text: &'static str,
    category: &'static str,
    price: f64,
}

struct LifeSeed {
    name: &'static str,
    description: &'static str,
    background_image: &'static str,
}

const WORK_BUNDLES: &[(&str, [WorkSeed; 4])] = &[
    (
        "product-manager",
        [
            WorkSeed { name: "Jira AI", logo: "#0052CC", rating: 4, description: "Automates sprint planning and summarizes backlog for efficient project management.", cta_text: "Try Free", category: "Project Management", price: 0.0 },
            WorkSeed { name: "Notion AI", logo: "#000000", rating: 5, description: "Summarizes documents and generates action items within your workspace.", cta_text: "Try Free", category: "Documentation", price: 10.0 },
            WorkSeed { name: "Miro AI", logo: "#FFD02F", rating: 5, description: "Generates mind maps and diagrams from text prompts for brainstorming.", cta_text: "Try Free", category: "Collaboration", price: 0.0 },
            WorkSeed { name: "Slack AI", logo: "#4A154B", rating: 4, description: "Provides channel recaps and conversation summaries.", cta_text: "Try Free", category: "Communication", price: 0.0 },
        ],
    ),
    (
        "developer",
        [
            WorkSeed { name: "GitHub Copilot", logo: "#000000", rating: 5, description: "AI pair programmer that helps you write code faster with suggestions.", cta_text: "Try Free", category: "Code Assistant", price: 10.0 },
            WorkSeed { name: "Cursor", logo: "#7C3AED", rating: 5, description: "AI-first code editor with powerful chat and edit capabilities.", cta_text: "Try Free", category: "IDE", price: 20.0 },
            WorkSeed { name: "ChatGPT", logo: "#10A37F", rating: 5, description: "General-purpose AI assistant for coding, debugging, and explanations.", cta_text: "Try Free", category: "AI Assistant", price: 0.0 },
            WorkSeed { name: "Tabnine", logo: "#6366F1", rating: 4, description: "AI code completion that works in any IDE you use.", cta_text: "Try Free", category: "Code Assistant", price: 0.0 },
        ],
    ),
    (
        "designer",
        [
            WorkSeed { name: "Figma AI", logo: "#F24E1E", rating: 5, description: "AI-powered design features integrated directly into Figma.", cta_text: "Try Free", category: "Design Tool", price: 15.0 },
            WorkSeed { name: "Midjourney", logo: "#000000", rating: 5, description: "Generate stunning images for design inspiration and assets.", cta_text: "Try Free", category: "Image Gen", price: 10.0 },
            WorkSeed { name: "Framer AI", logo: "#0055FF", rating: 4, description: "Generate and publish websites with AI assistance.", cta_text: "Try Free", category: "Web Design", price: 0.0 },
            WorkSeed { name: "Uizard", logo: "#7C3AED", rating: 4, description: "Transform sketches and screenshots into editable designs.", cta_text: "Try Free", category: "Prototyping", price: 0.0 },
        ],
    ),
    (
        "marketer",
        [
            WorkSeed { name: "Jasper AI", logo: "#FF6B6B", rating: 5, description: "AI writing assistant for marketing copy and content.", cta_text: "Try Free", category: "Content", price: 49.0 },
            WorkSeed { name: "Copy.ai", logo: "#7C3AED", rating: 4, description: "Generate marketing copy, emails, and social posts.", cta_text: "Try Free", category: "Copywriting", price: 0.0 },
            WorkSeed { name: "Surfer SEO", logo: "#10B981", rating: 4, description: "AI-powered SEO optimization for content.", cta_text: "Try Free", category: "SEO", price: 89.0 },
            WorkSeed { name: "Canva AI", logo: "#00C4CC", rating: 5, description: "Create stunning graphics with AI-powered design tools.", cta_text: "Try Free", category: "Design", price: 0.0 },
        ],
    ),
    (
        "writer",
        [
            WorkSeed { name: "Claude", logo: "#5A5A5A", rating: 5, description: "Advanced AI assistant for creative writing and analysis.", cta_text: "Try Free", category: "Writing", price: 20.0 },
            WorkSeed { name: "Grammarly", logo: "#15C39A", rating: 5, description: "AI writing assistant for grammar, spelling, and style.", cta_text: "Try Free", category: "Editing", price: 0.0 },
            WorkSeed { name: "Hemingway Editor", logo: "#FF5722", rating: 4, description: "Highlights complex sentences to improve clarity.", cta_text: "Try Free", category: "Editing", price: 0.0 },
            WorkSeed { name: "Jasper AI", logo: "#FF6B6B", rating: 5, description: "AI writing for various content formats.", cta_text: "Try Free", category: "Content", price: 49.0 },
        ],
    ),
    (
        "student",
        [
            WorkSeed { name: "Quillbot", logo: "#4CAF50", rating: 4, description: "AI paraphrasing and summarizing for academic writing.", cta_text: "Try Free", category: "Writing", price: 0.0 },
            WorkSeed { name: "Notion AI", logo: "#000000", rating: 5, description: "Organize notes and generate study summaries.", cta_text: "Try Free", category: "Productivity", price: 10.0 },
            WorkSeed { name: "Perplexity AI", logo: "#8B5CF6", rating: 5, description: "AI search engine with direct answers and sources.", cta_text: "Try Free", category: "Research", price: 0.0 },
            WorkSeed { name: "Grammarly", logo: "#15C39A", rating: 5, description: "Perfect your essays and assignments.", cta_text: "Try Free", category: "Writing", price: 0.0 },
        ],
    ),
    (
        "entrepreneur",
        [
            WorkSeed { name: "ChatGPT", logo: "#10A37F", rating: 5, description: "All-purpose AI assistant for business strategy.", cta_text: "Try Free", category: "AI Assistant", price: 0.0 },
            WorkSeed { name: "Notion AI", logo: "#000000", rating: 5, description: "Build your second brain for business planning.", cta_text: "Try Free", category: "Productivity", price: 10.0 },
            WorkSeed { name: "Pitch AI", logo: "#FFB800", rating: 4, description: "Create stunning pitch decks with AI assistance.", cta_text: "Try Free", category: "Presentation", price: 0.0 },
            WorkSeed { name: "Zapier AI", logo: "#FF4A00", rating: 4, description: "Automate workflows between your apps.", cta_text: "Try Free", category: "Automation", price: 0.0 },
        ],
    ),
    (
        "data-scientist",
        [
            WorkSeed { name: "GitHub Copilot", logo: "#000000", rating: 5, description: "AI code completion for Python and R.", cta_text: "Try Free", category: "Coding", price: 10.0 },
            WorkSeed { name: "ChatGPT", logo: "#10A37F", rating: 5, description: "Debug code and explain complex algorithms.", cta_text: "Try Free", category: "AI Assistant", price: 0.0 },
            WorkSeed { name: "Jupyter AI", logo: "#F37626", rating: 4, description: "AI-powered notebooks for data analysis.", cta_text: "Try Free", category: "Data Analysis", price: 0.0 },
            WorkSeed { name: "Hugging Face", logo: "#FFD21E", rating: 5, description: "Access thousands of ML models.", cta_text: "Try Free", category: "ML Platform", price: 0.0 },
        ],
    ),
    (
        "sales",
        [
            WorkSeed { name: "Apollo AI", logo: "#3F51B5", rating: 4, description: "AI-powered lead generation and outreach.", cta_text: "Try Free", category: "Sales", price: 0.0 },
            WorkSeed { name: "Gong", logo: "#FF9800", rating: 5, description: "Revenue intelligence from customer calls.", cta_text: "Request Demo", category: "Analytics", price: 0.0 },
            WorkSeed { name: "Outreach", logo: "#E91E63", rating: 4, description: "Automate your sales engagement sequences.", cta_text: "Request Demo", category: "Automation", price: 0.0 },
            WorkSeed { name: "ChatGPT", logo: "#10A37F", rating: 5, description: "Draft personalized outreach emails.", cta_text: "Try Free", category: "AI Assistant", price: 0.0 },
        ],
    ),
    (
        "hr-manager",
        [
            WorkSeed { name: "Textio", logo: "#9C27B0", rating: 5, description: "AI-powered language guidance for job posts.", cta_text: "Try Free", category: "Recruiting", price: 0.0 },
            WorkSeed { name: "HireVue AI", logo: "#4CAF50", rating: 4, description: "AI video interviewing and assessment.", cta_text: "Request Demo", category: "Recruiting", price: 0.0 },
            WorkSeed { name: "Culture Amp", logo: "#FFC107", rating: 4, description: "Employee experience with AI insights.", cta_text: "Request Demo", category: "Engagement", price: 0.0 },
            WorkSeed { name: "Notion AI", logo: "#000000", rating: 5, description: "Organize HR documents and policies.", cta_text: "Try Free", category: "Documentation", price: 10.0 },
        ],
    ),
    (
        "financial-analyst",
        [
            WorkSeed { name: "ChatGPT", logo: "#10A37F", rating: 5, description: "Financial modeling and analysis assistance.", cta_text: "Try Free", category: "AI Assistant", price: 0.0 },
            WorkSeed { name: "Excel Copilot", logo: "#217346", rating: 4, description: "AI-powered formulas and data analysis.", cta_text: "Try Free", category: "Spreadsheet", price: 0.0 },
            WorkSeed { name: "Bloomberg AI", logo: "#1A1A1A", rating: 5, description: "AI insights for financial markets.", cta_text: "Request Demo", category: "Finance", price: 0.0 },
            WorkSeed { name: "AlphaSense", logo: "#0066CC", rating: 4, description: "AI-powered market intelligence.", cta_text: "Request Demo", category: "Research", price: 0.0 },
        ],
    ),
    (
        "customer-support",
        [
            WorkSeed { name: "Intercom Fin", logo: "#6AFDEF", rating: 5, description: "AI-powered customer support chatbot.", cta_text: "Try Free", category: "Support", price: 0.0 },
            WorkSeed { name: "Zendesk AI", logo: "#03363D", rating: 4, description: "Automate ticket routing and responses.", cta_text: "Try Free", category: "Helpdesk", price: 0.0 },
            WorkSeed { name: "ChatGPT", logo: "#10A37F", rating: 5, description: "Draft empathetic customer responses.", cta_text: "Try Free", category: "AI Assistant", price: 0.0 },
            WorkSeed { name: "Freshdesk AI", logo: "#F37621", rating: 4, description: "Smart ticket management and automation.", cta_text: "Try Free", category: "Support", price: 0.0 },
        ],
    ),
    (
        "consultant",
        [
            WorkSeed { name: "ChatGPT", logo: "#10A37F", rating: 5, description: "Research and strategy development.", cta_text: "Try Free", category: "AI Assistant", price: 0.0 },
            WorkSeed { name: "Notion AI", logo: "#000000", rating: 5, description: "Client documentation and project tracking.", cta_text: "Try Free", category: "Productivity", price: 10.0 },
            WorkSeed { name: "Beautiful.ai", logo: "#FF5733", rating: 4, description: "Create stunning client presentations.", cta_text: "Try Free", category: "Presentation", price: 0.0 },
            WorkSeed { name: "Otter.ai", logo: "#4A90A4", rating: 4, description: "AI meeting transcription and summaries.", cta_text: "Try Free", category: "Meeting", price: 0.0 },
        ],
    ),
    (
        "researcher",
        [
            WorkSeed { name: "Perplexity AI", logo: "#8B5CF6", rating: 5, description: "AI search with academic sources.", cta_text: "Try Free", category: "Research", price: 0.0 },
            WorkSeed { name: "Elicit", logo: "#6366F1", rating: 5, description: "AI research assistant for papers.", cta_text: "Try Free", category: "Research", price: 0.0 },
            WorkSeed { name: "Consensus", logo: "#10B981", rating: 4, description: "Search for scientific consensus.", cta_text: "Try Free", category: "Research", price: 0.0 },
            WorkSeed { name: "ChatGPT", logo: "#10A37F", rating: 5, description: "Summarize and analyze research.", cta_text: "Try Free", category: "AI Assistant", price: 0.0 },
        ],
    ),
    (
        "teacher",
        [
            WorkSeed { name: "Quizlet AI", logo: "#4255FF", rating: 5, description: "Generate flashcards and quizzes.", cta_text: "Try Free", category: "Education", price: 0.0 },
            WorkSeed { name: "Canva AI", logo: "#00C4CC", rating: 5, description: "Create engaging lesson materials.", cta_text: "Try Free", category: "Design", price: 0.0 },
            WorkSeed { name: "ChatGPT", logo: "#10A37F", rating: 5, description: "Lesson planning and content creation.", cta_text: "Try Free", category: "AI Assistant", price: 0.0 },
            WorkSeed { name: "Grammarly", logo: "#15C39A", rating: 4, description: "Provide feedback on student writing.", cta_text: "Try Free", category: "Writing", price: 0.0 },
        ],
    ),
    (
        "other",
        [
            WorkSeed { name: "ChatGPT", logo: "#10A37F", rating: 5, description: "All-purpose AI assistant for any task.", cta_text: "Try Free", category: "AI Assistant", price: 0.0 },
            WorkSeed { name: "Notion AI", logo: "#000000", rating: 5, description: "Organize your work and ideas.", cta_text: "Try Free", category: "Productivity", price: 10.0 },
            WorkSeed { name: "Grammarly", logo: "#15C39A", rating: 5, description: "Improve your writing everywhere.", cta_text: "Try Free", category: "Writing", price: 0.0 },
            WorkSeed { name: "Canva AI", logo: "#00C4CC", rating: 4, description: "Create visuals for any purpose.", cta_text: "Try Free", category: "Design", price: 0.0 },
        ],
    ),
];

const LIFE_BUNDLES: &[(&str, [LifeSeed; 2])] = &[
    (
        "hiking",
        [
            LifeSeed { name: "AllTrails AI", description: "Find perfect hiking routes based on weather, fitness level, and trail conditions.", background_image: "https://images.unsplash.com/photo-1551632811-561732d1e306?w=800&q=80" },
            LifeSeed { name: "Mountain Project", description: "AI-powered climbing and hiking route recommendations.", background_image: "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?w=800&q=80" },
        ],
    ),
    (
        "gaming",
        [
            LifeSeed { name: "Discord AI", description: "Smart moderation and community management for gaming servers.", background_image: "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=800&q=80" },
            LifeSeed { name: "Parsec", description: "Low-latency game streaming with AI optimization.", background_image: "https://images.unsplash.com/photo-1538481199705-c710c4e965fc?w=800&q=80" },
        ],
    ),
    (
        "cooking",
        [
            LifeSeed { name: "ChefGPT", description: "Generate creative recipes from ingredients in your fridge.", background_image: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=800&q=80" },
            LifeSeed { name: "Whisk", description: "AI meal planning and grocery list generation.", background_image: "https://images.unsplash.com/photo-1490645935967-10de6ba17061?w=800&q=80" },
        ],
    ),
    (
        "reading",
        [
            LifeSeed { name: "Blinkist AI", description: "AI-powered book summaries and personalized recommendations.", background_image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=800&q=80" },
            LifeSeed { name: "Readwise", description: "AI highlights and spaced repetition for better retention.", background_image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&q=80" },
        ],
    ),
    (
        "traveling",
        [
            LifeSeed { name: "TripIt AI", description: "Smart travel itinerary planning and organization.", background_image: "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=800&q=80" },
            LifeSeed { name: "Hopper", description: "AI-powered flight and hotel price predictions.", background_image: "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?w=800&q=80" },
        ],
    ),
    (
        "coding",
        [
            LifeSeed { name: "LeetCode AI", description: "AI-powered coding practice with personalized problem sets.", background_image: "https://images.unsplash.com/photo-1515879218367-8466d910aaa4?w=800&q=80" },
            LifeSeed { name: "Exercism", description: "Learn programming with AI-assisted mentorship.", background_image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=800&q=80" },
        ],
    ),
];

// ---------------------------------------------------------------------------
// Bundle lookups
// ---------------------------------------------------------------------------

fn work_seeds(profession_id: &str) -> &'static [WorkSeed; 4] {
    WORK_BUNDLES
        .iter()
        .find(|(id, _)| *id == profession_id)
        .or_else(|| WORK_BUNDLES.iter().find(|(id, _)| *id == DEFAULT_PROFESSION))
        .map(|(_, seeds)| seeds)
        // DEFAULT_PROFESSION is always present in the table.
        .unwrap_or(&WORK_BUNDLES[0].1)
}

fn life_seeds(hobby_id: &str) -> &'static [LifeSeed; 2] {
    LIFE_BUNDLES
        .iter()
        .find(|(id, _)| *id == hobby_id)
        .or_else(|| LIFE_BUNDLES.iter().find(|(id, _)| *id == DEFAULT_HOBBY))
        .map(|(_, seeds)| seeds)
        .unwrap_or(&LIFE_BUNDLES[0].1)
}

/// Curated work tools for a profession id; unknown ids get the
/// `product-manager` bundle.
pub fn work_tools_for(profession_id: &str) -> Vec<WorkTool> {
    work_seeds(profession_id)
        .iter()
        .map(|s| WorkTool {
            name: s.name.to_string(),
            logo: s.logo.to_string(),
            logo_url: None,
            rating: s.rating,
            description: s.description.to_string(),
            cta_text: s.cta_text.to_string(),
            category: s.category.to_string(),
            price: s.price,
            url: None,
        })
        .collect()
}

/// Curated life tools for a hobby id; unknown ids get the `hiking` bundle.
pub fn life_tools_for(hobby_id: &str) -> Vec<LifeTool> {
    life_seeds(hobby_id)
        .iter()
        .map(|s| LifeTool {
            name: s.name.to_string(),
            description: s.description.to_string(),
            background_image: s.background_image.to_string(),
            url: None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Display extras
// ---------------------------------------------------------------------------

/// Templated FAQ entries for a profession label and life-context heading.
pub fn faq_entries(profession_label: &str, life_context: &str) -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: format!("Why these specific tools for {profession_label}s?"),
            answer: format!(
                "Our SmartMatch\u{2122} algorithm analyzed thousands of {profession_label} \
                 workflows to identify the most impactful AI tools. These recommendations are \
                 based on integration capabilities, user ratings, and real-world productivity \
                 gains."
            ),
        },
        FaqEntry {
            question: format!("How does the {life_context} integration work?"),
            answer: format!(
                "We match your hobby interests with AI tools that enhance those activities. \
                 For {}, we've selected apps that provide intelligent recommendations, planning \
                 assistance, and community features.",
                life_context.to_lowercase()
            ),
        },
        FaqEntry {
            question: "Can I customize this toolkit?".to_string(),
            answer: "Absolutely! After viewing your toolkit, you can swap tools, add new ones \
                     from our catalog of 2,847+ AI tools, or remove tools that don't fit your \
                     needs."
                .to_string(),
        },
    ]
}

/// Related-profession pointers shown under every toolkit.
pub fn related_professions() -> Vec<RelatedProfession> {
    vec![
        RelatedProfession { name: "Technical PM".to_string(), slug: "technical-pm".to_string() },
        RelatedProfession { name: "Project Manager".to_string(), slug: "project-manager".to_string() },
        RelatedProfession { name: "Scrum Master".to_string(), slug: "scrum-master".to_string() },
    ]
}

/// Current month as the toolkit's freshness stamp, e.g. `"Aug 2026"`.
pub fn display_updated_at() -> String {
    Utc::now().format("%b %Y").to_string()
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Build a complete toolkit from the curated bundles.
pub fn synthesize_toolkit(profession_id: &str, hobby_id: &str, name: &str, slug: &str) -> Toolkit {
    let profession_label = catalog::profession_label(profession_id);
    let life_context = catalog::hobby_label(hobby_id);

    let work_tools = work_tools_for(profession_id);
    let life_tools = life_tools_for(hobby_id);

    let mut specs = ToolkitSpecs::compute(&work_tools, &life_tools, CATALOG_BONUS_TOOLS);
    specs.updated_at = Some(display_updated_at());

    Toolkit {
        user_name: name.to_string(),
        slug: slug.to_string(),
        profession: profession_label.clone(),
        profession_slug: profession_id.to_string(),
        work_context: format!("{profession_label} Workflow"),
        life_context: life_context.clone(),
        description: format!(
            "A personalized AI toolkit for {profession_label}s who enjoy {}. Curated tools for \
             professional productivity and personal interests.",
            life_context.to_lowercase()
        ),
        long_description: format!(
            "This AI toolkit is specifically designed for {profession_label}s who enjoy {} \
             activities. The Work Mode section includes tools optimized for your daily workflow, \
             while the Life Mode section features AI-powered apps perfect for your hobbies and \
             interests.",
            life_context.to_lowercase()
        ),
        faq: faq_entries(&profession_label, &life_context),
        related_professions: related_professions(),
        work_tools,
        life_tools,
        specs,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

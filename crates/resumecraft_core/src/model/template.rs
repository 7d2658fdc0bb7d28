//! Built-in template catalog.
//!
//! # Responsibility
//! - Enumerate the selectable visual templates by stable ID.
//! - Keep template selection a pure rendering concern; templates never
//!   alter resume data.

/// Template ID assigned to newly created resumes.
pub const DEFAULT_TEMPLATE_ID: &str = "1";

/// One selectable visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub is_premium: bool,
}

const TEMPLATES: &[Template] = &[
    Template {
        id: "1",
        name: "Professional Classic",
        description: "Clean, traditional layout perfect for corporate roles",
        is_premium: false,
    },
    Template {
        id: "2",
        name: "Modern Minimal",
        description: "Sleek design with subtle colors for creative industries",
        is_premium: false,
    },
    Template {
        id: "3",
        name: "Executive Elite",
        description: "Sophisticated layout for senior-level positions",
        is_premium: true,
    },
    Template {
        id: "4",
        name: "Creative Pro",
        description: "Bold design showcasing creativity and innovation",
        is_premium: true,
    },
];

/// Returns the full catalog in display order.
pub fn catalog() -> &'static [Template] {
    TEMPLATES
}

/// Looks up one template by ID.
pub fn by_id(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|template| template.id == id)
}

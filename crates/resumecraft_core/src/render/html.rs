//! Self-contained HTML document rendering.
//!
//! # Responsibility
//! - Render the semantic section view into a standalone styled document.
//! - Escape user text; resume content is untrusted free text.

use crate::model::resume::Resume;
use crate::render::document::{sections, ResumeDocument};
use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tera::{Context, Tera};

/// Registered under an `.html` name so Tera auto-escaping applies.
const TEMPLATE_NAME: &str = "resume.html";

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, include_str!("resume.html.tera"))
        .expect("embedded resume template parses");
    tera
});

/// Rendering error for the HTML consumer.
#[derive(Debug)]
pub enum RenderError {
    Template(tera::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Template(err) => write!(f, "template rendering failed: {err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Template(err) => Some(err),
        }
    }
}

impl From<tera::Error> for RenderError {
    fn from(value: tera::Error) -> Self {
        Self::Template(value)
    }
}

/// Renders one resume as a self-contained HTML document.
pub fn render_html(resume: &Resume) -> Result<String, RenderError> {
    render_document(&sections(resume))
}

/// Renders an already-built section view; used by export fallbacks that
/// hold a document.
pub fn render_document(document: &ResumeDocument) -> Result<String, RenderError> {
    let context = Context::from_serialize(document)?;
    let html = TEMPLATES.render(TEMPLATE_NAME, &context)?;
    Ok(html)
}

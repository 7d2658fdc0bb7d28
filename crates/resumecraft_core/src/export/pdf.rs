//! PDF conversion behind an opaque converter contract.
//!
//! # Responsibility
//! - Define the converter contract consumed by the export pipeline.
//! - Provide the genpdf-backed implementation (A4, half-inch margins).
//!
//! # Invariants
//! - Converter failures are errors, never panics; the export pipeline
//!   owns the fallback.

use crate::render::document::{
    ResumeDocument, EDUCATION_HEADING, EXPERIENCE_HEADING, SKILLS_HEADING, SUMMARY_HEADING,
};
use genpdf::elements::{Break, Paragraph, UnorderedList};
use genpdf::style::Style;
use genpdf::{Document, Element, Margins, PaperSize, SimplePageDecorator};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// 0.5 inch expressed in millimeters.
const PAGE_MARGIN_MM: f64 = 12.7;

const NAME_SIZE: u8 = 22;
const HEADING_SIZE: u8 = 13;

pub type PdfResult<T> = Result<T, PdfError>;

/// Conversion error from a PDF backend.
///
/// Carries backend messages as plain text; the concrete backend stays an
/// implementation detail of the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfError {
    /// Font discovery/loading failed; conversion cannot start.
    Fonts(String),
    /// Document rendering failed inside the backend.
    Render(String),
}

impl Display for PdfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fonts(message) => write!(f, "font loading failed: {message}"),
            Self::Render(message) => write!(f, "pdf rendering failed: {message}"),
        }
    }
}

impl Error for PdfError {}

/// Opaque "sections to PDF bytes" conversion service.
///
/// Implementations are treated as unreliable external collaborators; the
/// export pipeline falls back to HTML on any error.
pub trait PdfConverter {
    fn convert(&self, document: &ResumeDocument) -> PdfResult<Vec<u8>>;
}

/// genpdf-backed converter loading a TrueType family from disk.
pub struct GenpdfConverter {
    font_dir: PathBuf,
    font_family: String,
}

impl GenpdfConverter {
    /// Creates a converter reading `{family}-Regular.ttf` and friends from
    /// `font_dir`. Missing fonts surface as conversion errors, triggering
    /// the HTML fallback.
    pub fn new(font_dir: impl Into<PathBuf>, font_family: impl Into<String>) -> Self {
        Self {
            font_dir: font_dir.into(),
            font_family: font_family.into(),
        }
    }
}

impl PdfConverter for GenpdfConverter {
    fn convert(&self, document: &ResumeDocument) -> PdfResult<Vec<u8>> {
        let family = genpdf::fonts::from_files(&self.font_dir, &self.font_family, None)
            .map_err(|err| PdfError::Fonts(err.to_string()))?;

        let mut doc = Document::new(family);
        doc.set_title(format!("{} - Resume", document.full_name));
        doc.set_paper_size(PaperSize::A4);
        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(Margins::all(PAGE_MARGIN_MM));
        doc.set_page_decorator(decorator);

        doc.push(
            Paragraph::new(document.full_name.as_str())
                .styled(Style::new().bold().with_font_size(NAME_SIZE)),
        );
        if !document.contacts.is_empty() {
            let line = document
                .contacts
                .iter()
                .map(|contact| contact.value.as_str())
                .collect::<Vec<_>>()
                .join("  |  ");
            doc.push(Paragraph::new(line));
        }

        if let Some(summary) = &document.summary {
            push_heading(&mut doc, SUMMARY_HEADING);
            doc.push(Paragraph::new(summary.as_str()));
        }

        if !document.experience.is_empty() {
            push_heading(&mut doc, EXPERIENCE_HEADING);
            for entry in &document.experience {
                doc.push(
                    Paragraph::new(format!("{} at {}", entry.position, entry.company))
                        .styled(Style::new().bold()),
                );
                match &entry.location {
                    Some(location) => {
                        doc.push(Paragraph::new(format!("{}  |  {}", entry.date_range, location)));
                    }
                    None => doc.push(Paragraph::new(entry.date_range.as_str())),
                }
                if !entry.bullets.is_empty() {
                    let mut list = UnorderedList::new();
                    for bullet in &entry.bullets {
                        list.push(Paragraph::new(bullet.as_str()));
                    }
                    doc.push(list);
                }
                doc.push(Break::new(1));
            }
        }

        if !document.education.is_empty() {
            push_heading(&mut doc, EDUCATION_HEADING);
            for entry in &document.education {
                doc.push(
                    Paragraph::new(format!("{}, {}", entry.degree_line, entry.institution))
                        .styled(Style::new().bold()),
                );
                let mut line = entry.date_range.clone();
                if let Some(location) = &entry.location {
                    line.push_str("  |  ");
                    line.push_str(location);
                }
                if let Some(gpa) = &entry.gpa {
                    line.push_str("  |  GPA: ");
                    line.push_str(gpa);
                }
                doc.push(Paragraph::new(line));
                doc.push(Break::new(1));
            }
        }

        if !document.skill_groups.is_empty() {
            push_heading(&mut doc, SKILLS_HEADING);
            for group in &document.skill_groups {
                doc.push(Paragraph::new(format!(
                    "{}: {}",
                    group.category,
                    group.badges.join(", ")
                )));
            }
        }

        let mut bytes = Vec::new();
        doc.render(&mut bytes)
            .map_err(|err| PdfError::Render(err.to_string()))?;
        Ok(bytes)
    }
}

fn push_heading(doc: &mut Document, heading: &str) {
    doc.push(Break::new(1));
    doc.push(Paragraph::new(heading).styled(Style::new().bold().with_font_size(HEADING_SIZE)));
}

//! Export pipeline: HTML and PDF artifacts plus share links.
//!
//! # Responsibility
//! - Write export artifacts named after the resume owner.
//! - Treat the PDF converter as an unreliable external collaborator:
//!   conversion failure degrades to the HTML artifact plus recovery
//!   instructions, never to a hard error.
//!
//! # Invariants
//! - Export is one synchronous operation at a time per caller.
//! - Artifact names derive from the full name with whitespace runs
//!   replaced by underscores.

pub mod pdf;
pub mod share;

use crate::model::resume::Resume;
use crate::render::document::sections;
use crate::render::html::{render_document, render_html, RenderError};
use log::{info, warn};
use once_cell::sync::Lazy;
use pdf::PdfConverter;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Shown to the user when PDF conversion fails and the HTML artifact is
/// produced instead.
pub const PDF_RECOVERY_INSTRUCTIONS: &str = "PDF export failed. Your resume has been exported \
as HTML instead.\n\nTo convert to PDF:\n1. Open the exported HTML file in your browser\n2. Press \
Ctrl+P (or Cmd+P on Mac) to print\n3. Select \"Save as PDF\" as the destination";

pub type ExportResult<T> = Result<T, ExportError>;

/// Export-layer error for rendering and file output.
#[derive(Debug)]
pub enum ExportError {
    Render(RenderError),
    Io(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to write export artifact: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RenderError> for ExportError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Result of a PDF export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// PDF conversion succeeded.
    Pdf(PathBuf),
    /// Conversion failed; the HTML artifact was produced instead.
    HtmlFallback {
        path: PathBuf,
        instructions: &'static str,
    },
}

/// Derives the artifact base name from the owner's full name.
///
/// Whitespace runs become underscores; a blank name falls back to plain
/// "Resume".
pub fn artifact_stem(full_name: &str) -> String {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return "Resume".to_string();
    }
    format!("{}_Resume", WHITESPACE_RE.replace_all(trimmed, "_"))
}

/// Writes the self-contained HTML artifact and returns its path.
pub fn export_html(resume: &Resume, out_dir: &Path) -> ExportResult<PathBuf> {
    let html = render_html(resume)?;
    let path = out_dir.join(format!(
        "{}.html",
        artifact_stem(&resume.personal_info.full_name)
    ));
    fs::write(&path, html)?;
    info!(
        "event=export_html module=export status=ok resume_id={} path={}",
        resume.id,
        path.display()
    );
    Ok(path)
}

/// Converts the resume to PDF, falling back to the HTML artifact when the
/// converter fails.
pub fn export_pdf<P: PdfConverter>(
    resume: &Resume,
    out_dir: &Path,
    converter: &P,
) -> ExportResult<ExportOutcome> {
    let document = sections(resume);
    let stem = artifact_stem(&resume.personal_info.full_name);

    match converter.convert(&document) {
        Ok(bytes) => {
            let path = out_dir.join(format!("{stem}.pdf"));
            fs::write(&path, bytes)?;
            info!(
                "event=export_pdf module=export status=ok resume_id={} path={}",
                resume.id,
                path.display()
            );
            Ok(ExportOutcome::Pdf(path))
        }
        Err(err) => {
            warn!(
                "event=export_pdf module=export status=fallback resume_id={} error={err}",
                resume.id
            );
            let html = render_document(&document)?;
            let path = out_dir.join(format!("{stem}.html"));
            fs::write(&path, html)?;
            Ok(ExportOutcome::HtmlFallback {
                path,
                instructions: PDF_RECOVERY_INSTRUCTIONS,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::artifact_stem;

    #[test]
    fn whitespace_runs_collapse_to_single_underscores() {
        assert_eq!(artifact_stem("Sarah  Johnson"), "Sarah_Johnson_Resume");
        assert_eq!(artifact_stem("Ana Maria Silva"), "Ana_Maria_Silva_Resume");
    }

    #[test]
    fn blank_name_falls_back_to_plain_resume() {
        assert_eq!(artifact_stem(""), "Resume");
        assert_eq!(artifact_stem("   "), "Resume");
    }
}

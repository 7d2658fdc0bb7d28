//! Core domain logic for resumecraft, a local-first resume builder.
//! This crate is the single source of truth for business invariants.

pub mod canvas;
pub mod clock;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod session;

pub use canvas::canvas_session::{CanvasSession, DragState};
pub use clock::{Clock, SystemClock};
pub use export::pdf::{GenpdfConverter, PdfConverter, PdfError};
pub use export::share::share_link;
pub use export::{
    export_html, export_pdf, ExportError, ExportOutcome, PDF_RECOVERY_INSTRUCTIONS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::element::{EditorElement, ElementId, ElementKind, ElementPatch, TextAlign};
pub use model::resume::{
    Education, Experience, PersonalInfo, Resume, ResumeId, Skill, SkillLevel,
};
pub use model::sample::sample_resume;
pub use model::template::{by_id as template_by_id, catalog as template_catalog};
pub use render::{format_month_year, render_html, render_text, sections};
pub use repo::resume_store::{ResumeStore, SqliteResumeStore, StoreError};
pub use session::autosave::{Autosaver, SaveOutcome};
pub use session::resume_session::ResumeSession;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

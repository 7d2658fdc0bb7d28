//! Rendering pipeline from resume snapshots to viewable documents.
//!
//! # Responsibility
//! - Transform resume data into semantic document sections, purely and
//!   deterministically.
//! - Serve both consumers (text preview, HTML export) from the same
//!   section logic and the same date formatting.
//!
//! # Invariants
//! - Absent fields are omitted entirely; no empty placeholders.
//! - Date formatting is identical across all consumers.

pub mod document;
pub mod html;
pub mod text;

pub use document::{format_month_year, sections, ResumeDocument};
pub use html::{render_html, RenderError};
pub use text::render_text;

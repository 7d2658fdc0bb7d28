//! Plain-text preview rendering.
//!
//! # Responsibility
//! - Render the semantic section view for terminal preview.
//! - Stay structurally identical to the HTML consumer: same sections,
//!   same ordering, same date strings.

use crate::model::resume::Resume;
use crate::render::document::{
    sections, ResumeDocument, EDUCATION_HEADING, EXPERIENCE_HEADING, SKILLS_HEADING,
    SUMMARY_HEADING,
};

/// Renders one resume as a plain-text preview.
pub fn render_text(resume: &Resume) -> String {
    render_document_text(&sections(resume))
}

fn render_document_text(document: &ResumeDocument) -> String {
    let mut out = String::new();

    out.push_str(&document.full_name);
    out.push('\n');
    for contact in &document.contacts {
        out.push_str(&format!("{}: {}\n", contact.label, contact.value));
    }

    if let Some(summary) = &document.summary {
        push_heading(&mut out, SUMMARY_HEADING);
        out.push_str(summary);
        out.push('\n');
    }

    if !document.experience.is_empty() {
        push_heading(&mut out, EXPERIENCE_HEADING);
        for entry in &document.experience {
            out.push_str(&format!("{} at {}\n", entry.position, entry.company));
            match &entry.location {
                Some(location) => {
                    out.push_str(&format!("  {} | {}\n", entry.date_range, location));
                }
                None => out.push_str(&format!("  {}\n", entry.date_range)),
            }
            for bullet in &entry.bullets {
                out.push_str(&format!("  - {bullet}\n"));
            }
        }
    }

    if !document.education.is_empty() {
        push_heading(&mut out, EDUCATION_HEADING);
        for entry in &document.education {
            out.push_str(&format!("{}, {}\n", entry.degree_line, entry.institution));
            out.push_str(&format!("  {}", entry.date_range));
            if let Some(location) = &entry.location {
                out.push_str(&format!(" | {location}"));
            }
            if let Some(gpa) = &entry.gpa {
                out.push_str(&format!(" | GPA: {gpa}"));
            }
            out.push('\n');
        }
    }

    if !document.skill_groups.is_empty() {
        push_heading(&mut out, SKILLS_HEADING);
        for group in &document.skill_groups {
            out.push_str(&format!("{}: {}\n", group.category, group.badges.join(", ")));
        }
    }

    out
}

fn push_heading(out: &mut String, heading: &str) {
    out.push('\n');
    out.push_str(heading);
    out.push('\n');
    for _ in 0..heading.len() {
        out.push('-');
    }
    out.push('\n');
}

//! Semantic document sections derived from a resume snapshot.
//!
//! # Responsibility
//! - Decide which sections exist and in which order.
//! - Own the single date-formatting and skill-grouping implementation.
//!
//! # Invariants
//! - A section is emitted iff its source data is non-empty.
//! - Skill categories keep first-seen order; skills keep list order
//!   within their category.
//! - `format_month_year("")` is the empty string.

use crate::model::resume::{Resume, Skill};
use chrono::NaiveDate;
use serde::Serialize;

pub const SUMMARY_HEADING: &str = "Professional Summary";
pub const EXPERIENCE_HEADING: &str = "Professional Experience";
pub const EDUCATION_HEADING: &str = "Education";
pub const SKILLS_HEADING: &str = "Skills";

/// One present contact field in header display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceBlock {
    pub position: String,
    pub company: String,
    /// `None` serializes as null so template conditionals see a falsy
    /// value instead of a missing key.
    pub location: Option<String>,
    pub date_range: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationBlock {
    /// Degree with " in {field}" appended when a field is present.
    pub degree_line: String,
    pub institution: String,
    pub location: Option<String>,
    pub date_range: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    /// Preformatted "{name} ({level})" badge labels.
    pub badges: Vec<String>,
}

/// Renderable view of one resume, shared by preview and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeDocument {
    pub full_name: String,
    pub contacts: Vec<Contact>,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceBlock>,
    pub education: Vec<EducationBlock>,
    pub skill_groups: Vec<SkillGroup>,
}

/// Formats a "YYYY-MM" month string as "Mon YYYY".
///
/// Empty input yields an empty string; input that does not parse as a
/// month is passed through unchanged.
pub fn format_month_year(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Builds the semantic section view of one resume.
pub fn sections(resume: &Resume) -> ResumeDocument {
    let info = &resume.personal_info;

    let mut contacts = Vec::new();
    for (label, icon, value) in [
        ("email", "\u{1F4E7}", &info.email),
        ("phone", "\u{1F4DE}", &info.phone),
        ("location", "\u{1F4CD}", &info.location),
        ("website", "\u{1F310}", &info.website),
        ("linkedin", "\u{1F4BC}", &info.linkedin),
    ] {
        if !value.is_empty() {
            contacts.push(Contact {
                label,
                icon,
                value: value.clone(),
            });
        }
    }

    let summary = if info.summary.is_empty() {
        None
    } else {
        Some(info.summary.clone())
    };

    let experience = resume
        .experience
        .iter()
        .map(|entry| ExperienceBlock {
            position: entry.position.clone(),
            company: entry.company.clone(),
            location: non_empty(&entry.location),
            date_range: date_range(&entry.start_date, &entry.end_date, entry.current),
            bullets: entry.description.clone(),
        })
        .collect();

    let education = resume
        .education
        .iter()
        .map(|entry| {
            let degree_line = if entry.field.is_empty() {
                entry.degree.clone()
            } else {
                format!("{} in {}", entry.degree, entry.field)
            };
            EducationBlock {
                degree_line,
                institution: entry.institution.clone(),
                location: non_empty(&entry.location),
                date_range: date_range(&entry.start_date, &entry.end_date, false),
                gpa: entry.gpa.clone(),
            }
        })
        .collect();

    ResumeDocument {
        full_name: info.full_name.clone(),
        contacts,
        summary,
        experience,
        education,
        skill_groups: group_skills(&resume.skills),
    }
}

/// Groups skills by category, categories in first-seen order.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        let badge = format!("{} ({})", skill.name, skill.level);
        match groups
            .iter_mut()
            .find(|group| group.category == skill.category)
        {
            Some(group) => group.badges.push(badge),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                badges: vec![badge],
            }),
        }
    }
    groups
}

fn date_range(start: &str, end: &str, current: bool) -> String {
    let end_label = if current {
        "Present".to_string()
    } else {
        format_month_year(end)
    };
    format!("{} - {}", format_month_year(start), end_label)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{format_month_year, group_skills};
    use crate::model::resume::{Skill, SkillLevel};

    #[test]
    fn empty_date_formats_to_empty_string() {
        assert_eq!(format_month_year(""), "");
    }

    #[test]
    fn month_string_formats_to_abbreviated_month_and_year() {
        assert_eq!(format_month_year("2022-03"), "Mar 2022");
        assert_eq!(format_month_year("2021-01"), "Jan 2021");
        assert_eq!(format_month_year("2020-12"), "Dec 2020");
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(format_month_year("soon"), "soon");
    }

    #[test]
    fn skill_groups_keep_first_seen_category_order() {
        let skills = vec![
            Skill::new("JavaScript", SkillLevel::Expert, "Technical"),
            Skill::new("Spanish", SkillLevel::Advanced, "Language"),
            Skill::new("React", SkillLevel::Expert, "Technical"),
        ];

        let groups = group_skills(&skills);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Technical");
        assert_eq!(groups[0].badges.len(), 2);
        assert_eq!(groups[1].category, "Language");
        assert_eq!(groups[1].badges, vec!["Spanish (Advanced)".to_string()]);
    }
}

//! Resume aggregate model.
//!
//! # Responsibility
//! - Define the root resume record and its child entities.
//! - Provide constructors that assign stable IDs and timestamps.
//! - Keep the persisted JSON shape stable via explicit serde naming.
//!
//! # Invariants
//! - `id` is stable for the resume lifetime and never reused.
//! - `updated_at` only moves forward; mutation paths own the bump.
//! - An experience marked `current` carries an empty end date.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a resume and all of its child entities.
pub type ResumeId = Uuid;

/// Contact and summary block owned by one resume.
///
/// All fields are free text; empty string means "not provided". Required
/// fields are a UI concern, not a model invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
}

/// One work-history entry. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: ResumeId,
    pub company: String,
    pub position: String,
    pub location: String,
    /// "YYYY-MM" month string; empty when not provided.
    pub start_date: String,
    /// "YYYY-MM" month string; ignored and cleared while `current` is set.
    pub end_date: String,
    pub current: bool,
    /// Bullet lines rendered under the entry, in order.
    pub description: Vec<String>,
}

impl Experience {
    /// Creates an entry with a generated stable ID.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            ..Self::default()
        }
    }

    /// Returns the entry with `end_date` cleared when `current` is set.
    ///
    /// Write paths normalize instead of rejecting; a current role simply
    /// has no end date.
    pub fn normalized(mut self) -> Self {
        if self.current {
            self.end_date.clear();
        }
        self
    }
}

/// One education entry. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: ResumeId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl Education {
    /// Creates an entry with a generated stable ID.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            ..Self::default()
        }
    }
}

/// Self-assessed proficiency for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Display for SkillLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        };
        write!(f, "{label}")
    }
}

/// One skill entry. `category` is a free-text grouping key used at render
/// time; skills carry no enforced order of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: ResumeId,
    pub name: String,
    pub level: SkillLevel,
    pub category: String,
}

impl Skill {
    /// Creates a skill with a generated stable ID.
    pub fn new(name: impl Into<String>, level: SkillLevel, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            level,
            category: category.into(),
        }
    }
}

/// Root aggregate for one editable resume document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    /// Stable ID, assigned at creation, immutable afterwards.
    pub id: ResumeId,
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    /// Reference into the built-in template catalog; rendering style only.
    pub template_id: String,
    /// Creation instant, epoch milliseconds.
    pub created_at: i64,
    /// Last mutation instant, epoch milliseconds. Refreshed on every write.
    pub updated_at: i64,
}

impl Resume {
    /// Creates an empty resume with a fresh ID and the default template.
    pub fn empty(now_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            personal_info: PersonalInfo::default(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            template_id: crate::model::template::DEFAULT_TEMPLATE_ID.to_string(),
            created_at: now_ms,
            updated_at: now_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Experience, Resume, Skill, SkillLevel};

    #[test]
    fn empty_resume_uses_default_template_and_fresh_id() {
        let a = Resume::empty(1_000);
        let b = Resume::empty(1_000);
        assert_ne!(a.id, b.id);
        assert_eq!(a.template_id, "1");
        assert!(a.experience.is_empty());
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn normalized_clears_end_date_for_current_role() {
        let mut exp = Experience::new();
        exp.current = true;
        exp.end_date = "2024-05".to_string();
        assert_eq!(exp.normalized().end_date, "");
    }

    #[test]
    fn normalized_keeps_end_date_for_past_role() {
        let mut exp = Experience::new();
        exp.end_date = "2024-05".to_string();
        assert_eq!(exp.normalized().end_date, "2024-05");
    }

    #[test]
    fn resume_json_uses_camel_case_field_names() {
        let resume = Resume::empty(42);
        let json = serde_json::to_string(&resume).expect("resume serializes");
        assert!(json.contains("\"personalInfo\""));
        assert!(json.contains("\"templateId\""));
        assert!(json.contains("\"updatedAt\""));
    }

    #[test]
    fn skill_level_round_trips_through_json() {
        let skill = Skill::new("Rust", SkillLevel::Expert, "Technical");
        let json = serde_json::to_string(&skill).expect("skill serializes");
        assert!(json.contains("\"Expert\""));
        let back: Skill = serde_json::from_str(&json).expect("skill deserializes");
        assert_eq!(back.level, SkillLevel::Expert);
    }
}

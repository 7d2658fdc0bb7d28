//! Resume data store: the fixed mutation set over one current resume.
//!
//! # Responsibility
//! - Apply structured edits as immutable snapshot replacements.
//! - Bump `updated_at` on every effective mutation.
//!
//! # Invariants
//! - Callers never observe a partially-updated resume; a mutation either
//!   installs a complete new snapshot or changes nothing.
//! - All operations are no-ops while no current resume exists, except
//!   creation and list replacement.
//! - Update/delete with an unknown ID is silently ignored.

use crate::clock::Clock;
use crate::model::resume::{
    Education, Experience, PersonalInfo, Resume, ResumeId, Skill,
};

/// Single-user editing session owning the current resume and saved list.
pub struct ResumeSession<C: Clock> {
    clock: C,
    current: Option<Resume>,
    saved: Vec<Resume>,
}

impl<C: Clock> ResumeSession<C> {
    /// Creates an empty session with no current resume.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            current: None,
            saved: Vec::new(),
        }
    }

    /// Returns the current resume snapshot, if any.
    pub fn current(&self) -> Option<&Resume> {
        self.current.as_ref()
    }

    /// Returns the saved-resume list as last published by persistence.
    pub fn saved(&self) -> &[Resume] {
        &self.saved
    }

    /// Replaces the current resume with a fresh empty one.
    pub fn create_new(&mut self) -> &Resume {
        self.current.insert(Resume::empty(self.clock.now_ms()))
    }

    /// Replaces the current resume wholesale (loading a saved snapshot).
    pub fn set_resume(&mut self, resume: Resume) {
        self.current = Some(resume);
    }

    /// Replaces the saved list wholesale after a persistence round-trip.
    pub fn load_resumes(&mut self, resumes: Vec<Resume>) {
        self.saved = resumes;
    }

    /// Replaces the personal info block wholesale.
    pub fn update_personal_info(&mut self, info: PersonalInfo) -> bool {
        self.mutate(|resume| {
            resume.personal_info = info;
            true
        })
    }

    /// Appends one experience entry; a `current` role loses its end date.
    pub fn add_experience(&mut self, entry: Experience) -> bool {
        let entry = entry.normalized();
        self.mutate(|resume| {
            resume.experience.push(entry);
            true
        })
    }

    /// Replaces the experience entry with the matching ID, keeping its
    /// position and identity. Unknown IDs are ignored.
    pub fn update_experience(&mut self, id: ResumeId, entry: Experience) -> bool {
        let entry = Experience { id, ..entry.normalized() };
        self.mutate(|resume| {
            match resume.experience.iter_mut().find(|item| item.id == id) {
                Some(slot) => {
                    *slot = entry;
                    true
                }
                None => false,
            }
        })
    }

    /// Removes the experience entry with the matching ID, if present.
    pub fn delete_experience(&mut self, id: ResumeId) -> bool {
        self.mutate(|resume| {
            let before = resume.experience.len();
            resume.experience.retain(|item| item.id != id);
            resume.experience.len() != before
        })
    }

    /// Appends one education entry.
    pub fn add_education(&mut self, entry: Education) -> bool {
        self.mutate(|resume| {
            resume.education.push(entry);
            true
        })
    }

    /// Replaces the education entry with the matching ID in place.
    pub fn update_education(&mut self, id: ResumeId, entry: Education) -> bool {
        let entry = Education { id, ..entry };
        self.mutate(|resume| {
            match resume.education.iter_mut().find(|item| item.id == id) {
                Some(slot) => {
                    *slot = entry;
                    true
                }
                None => false,
            }
        })
    }

    /// Removes the education entry with the matching ID, if present.
    pub fn delete_education(&mut self, id: ResumeId) -> bool {
        self.mutate(|resume| {
            let before = resume.education.len();
            resume.education.retain(|item| item.id != id);
            resume.education.len() != before
        })
    }

    /// Appends one skill entry.
    pub fn add_skill(&mut self, entry: Skill) -> bool {
        self.mutate(|resume| {
            resume.skills.push(entry);
            true
        })
    }

    /// Replaces the skill entry with the matching ID in place.
    pub fn update_skill(&mut self, id: ResumeId, entry: Skill) -> bool {
        let entry = Skill { id, ..entry };
        self.mutate(|resume| {
            match resume.skills.iter_mut().find(|item| item.id == id) {
                Some(slot) => {
                    *slot = entry;
                    true
                }
                None => false,
            }
        })
    }

    /// Removes the skill entry with the matching ID, if present.
    pub fn delete_skill(&mut self, id: ResumeId) -> bool {
        self.mutate(|resume| {
            let before = resume.skills.len();
            resume.skills.retain(|item| item.id != id);
            resume.skills.len() != before
        })
    }

    /// Selects a rendering template; data is untouched.
    pub fn set_template(&mut self, template_id: impl Into<String>) -> bool {
        let template_id = template_id.into();
        self.mutate(|resume| {
            resume.template_id = template_id;
            true
        })
    }

    /// Clone-modify-swap so no caller ever sees a half-applied edit.
    fn mutate<F>(&mut self, apply: F) -> bool
    where
        F: FnOnce(&mut Resume) -> bool,
    {
        let Some(current) = self.current.as_ref() else {
            return false;
        };

        let mut next = current.clone();
        if !apply(&mut next) {
            return false;
        }

        next.updated_at = self.clock.now_ms();
        self.current = Some(next);
        true
    }
}

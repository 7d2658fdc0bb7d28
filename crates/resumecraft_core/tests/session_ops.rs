use resumecraft_core::{
    Clock, Education, Experience, PersonalInfo, ResumeSession, Skill, SkillLevel,
};
use std::cell::Cell;
use uuid::Uuid;

/// Deterministic clock advancing one millisecond per read.
struct StepClock {
    now: Cell<i64>,
}

impl StepClock {
    fn new(start: i64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }
}

impl Clock for StepClock {
    fn now_ms(&self) -> i64 {
        let value = self.now.get();
        self.now.set(value + 1);
        value
    }
}

fn experience(company: &str, position: &str) -> Experience {
    Experience {
        company: company.to_string(),
        position: position.to_string(),
        start_date: "2021-01".to_string(),
        ..Experience::new()
    }
}

#[test]
fn create_new_installs_empty_resume_with_defaults() {
    let mut session = ResumeSession::new(StepClock::new(1_000));
    let resume = session.create_new();

    assert_eq!(resume.template_id, "1");
    assert!(resume.experience.is_empty());
    assert!(resume.education.is_empty());
    assert!(resume.skills.is_empty());
    assert_eq!(resume.created_at, resume.updated_at);
}

#[test]
fn mutations_without_current_resume_are_noops() {
    let mut session = ResumeSession::new(StepClock::new(0));

    assert!(!session.update_personal_info(PersonalInfo::default()));
    assert!(!session.add_experience(Experience::new()));
    assert!(!session.set_template("2"));
    assert!(session.current().is_none());
}

#[test]
fn experience_sequence_preserves_insertion_order_and_ids() {
    let mut session = ResumeSession::new(StepClock::new(0));
    session.create_new();

    let first = experience("Acme", "Engineer");
    let second = experience("Globex", "Senior Engineer");
    let third = experience("Initech", "Lead Engineer");
    let (first_id, second_id, third_id) = (first.id, second.id, third.id);

    session.add_experience(first);
    session.add_experience(second);
    session.add_experience(third);

    let mut replacement = experience("Globex Corp", "Staff Engineer");
    replacement.id = second_id;
    assert!(session.update_experience(second_id, replacement));
    assert!(session.delete_experience(first_id));

    let current = session.current().expect("current resume exists");
    let ids: Vec<_> = current.experience.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![second_id, third_id]);
    assert_eq!(current.experience[0].company, "Globex Corp");
    assert_eq!(current.experience[0].position, "Staff Engineer");
}

#[test]
fn update_with_unknown_id_is_silently_ignored() {
    let mut session = ResumeSession::new(StepClock::new(0));
    session.create_new();
    session.add_experience(experience("Acme", "Engineer"));
    let before = session.current().expect("current exists").clone();

    assert!(!session.update_experience(Uuid::new_v4(), experience("Ghost", "Nobody")));
    assert!(!session.delete_experience(Uuid::new_v4()));

    let after = session.current().expect("current exists");
    assert_eq!(after, &before);
}

#[test]
fn updated_at_strictly_increases_across_mutations() {
    let mut session = ResumeSession::new(StepClock::new(10));
    session.create_new();
    let mut last = session.current().expect("current exists").updated_at;

    session.add_experience(experience("Acme", "Engineer"));
    let after_add = session.current().expect("current exists").updated_at;
    assert!(after_add > last);
    last = after_add;

    session.set_template("3");
    let after_template = session.current().expect("current exists").updated_at;
    assert!(after_template > last);
}

#[test]
fn read_only_access_never_bumps_updated_at() {
    let mut session = ResumeSession::new(StepClock::new(10));
    session.create_new();
    let stamp = session.current().expect("current exists").updated_at;

    let _ = session.current();
    let _ = session.saved();

    assert_eq!(session.current().expect("current exists").updated_at, stamp);
}

#[test]
fn current_role_loses_end_date_on_add_and_update() {
    let mut session = ResumeSession::new(StepClock::new(0));
    session.create_new();

    let mut entry = experience("Acme", "Engineer");
    entry.current = true;
    entry.end_date = "2024-01".to_string();
    let id = entry.id;
    session.add_experience(entry);

    let stored = &session.current().expect("current exists").experience[0];
    assert!(stored.current);
    assert_eq!(stored.end_date, "");

    let mut replacement = experience("Acme", "Engineer II");
    replacement.current = true;
    replacement.end_date = "2025-06".to_string();
    session.update_experience(id, replacement);

    let stored = &session.current().expect("current exists").experience[0];
    assert_eq!(stored.end_date, "");
}

#[test]
fn education_and_skill_operations_mirror_experience_semantics() {
    let mut session = ResumeSession::new(StepClock::new(0));
    session.create_new();

    let education = Education {
        institution: "Berkeley".to_string(),
        degree: "BSc".to_string(),
        ..Education::new()
    };
    let education_id = education.id;
    session.add_education(education);

    let mut updated = Education {
        institution: "UC Berkeley".to_string(),
        degree: "BSc".to_string(),
        ..Education::new()
    };
    updated.id = education_id;
    assert!(session.update_education(education_id, updated));

    let skill = Skill::new("Rust", SkillLevel::Advanced, "Technical");
    let skill_id = skill.id;
    session.add_skill(skill);
    assert!(session.delete_skill(skill_id));
    assert!(!session.delete_skill(skill_id));

    let current = session.current().expect("current exists");
    assert_eq!(current.education[0].institution, "UC Berkeley");
    assert!(current.skills.is_empty());
}

#[test]
fn set_resume_replaces_current_wholesale() {
    let mut session = ResumeSession::new(StepClock::new(0));
    session.create_new();
    let first_id = session.current().expect("current exists").id;

    let mut other = resumecraft_core::Resume::empty(500);
    other.personal_info.full_name = "Loaded".to_string();
    let other_id = other.id;
    session.set_resume(other);

    let current = session.current().expect("current exists");
    assert_eq!(current.id, other_id);
    assert_ne!(current.id, first_id);
    assert_eq!(current.personal_info.full_name, "Loaded");
}

#[test]
fn load_resumes_replaces_saved_list_wholesale() {
    let mut session = ResumeSession::new(StepClock::new(0));
    assert!(session.saved().is_empty());

    let list = vec![
        resumecraft_core::Resume::empty(1),
        resumecraft_core::Resume::empty(2),
    ];
    session.load_resumes(list.clone());
    assert_eq!(session.saved(), list.as_slice());

    session.load_resumes(Vec::new());
    assert!(session.saved().is_empty());
}

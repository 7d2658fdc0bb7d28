//! Seeded example resume.
//!
//! # Responsibility
//! - Provide a complete, realistic resume for demos and tests.

use crate::model::resume::{
    Education, Experience, PersonalInfo, Resume, Skill, SkillLevel,
};

/// Builds the bundled sample resume with fresh IDs.
pub fn sample_resume(now_ms: i64) -> Resume {
    let mut resume = Resume::empty(now_ms);
    resume.personal_info = PersonalInfo {
        full_name: "Sarah Johnson".to_string(),
        email: "sarah.johnson@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
        linkedin: "linkedin.com/in/sarahjohnson".to_string(),
        website: "sarahjohnson.dev".to_string(),
        summary: "Results-driven Software Engineer with 5+ years of experience \
                  building scalable web applications. Passionate about clean code, \
                  user experience, and collaborative problem-solving."
            .to_string(),
    };

    resume.experience = vec![
        Experience {
            company: "Tech Innovations Inc.".to_string(),
            position: "Senior Frontend Developer".to_string(),
            location: "San Francisco, CA".to_string(),
            start_date: "2022-03".to_string(),
            end_date: String::new(),
            current: true,
            description: vec![
                "Led development of React-based dashboard serving 10,000+ daily users"
                    .to_string(),
                "Implemented responsive design patterns improving mobile experience by 40%"
                    .to_string(),
                "Mentored 3 junior developers and established code review processes"
                    .to_string(),
            ],
            ..Experience::new()
        },
        Experience {
            company: "StartupXYZ".to_string(),
            position: "Frontend Developer".to_string(),
            location: "Remote".to_string(),
            start_date: "2020-01".to_string(),
            end_date: "2022-02".to_string(),
            current: false,
            description: vec![
                "Built user interfaces for SaaS platform using React and TypeScript"
                    .to_string(),
                "Increased conversion rates by 25% through A/B testing and optimization"
                    .to_string(),
            ],
            ..Experience::new()
        },
    ];

    resume.education = vec![Education {
        institution: "University of California, Berkeley".to_string(),
        degree: "Bachelor of Science".to_string(),
        field: "Computer Science".to_string(),
        location: "Berkeley, CA".to_string(),
        start_date: "2016-09".to_string(),
        end_date: "2020-05".to_string(),
        gpa: Some("3.7".to_string()),
        ..Education::new()
    }];

    resume.skills = vec![
        Skill::new("JavaScript", SkillLevel::Expert, "Technical"),
        Skill::new("React", SkillLevel::Expert, "Technical"),
        Skill::new("TypeScript", SkillLevel::Advanced, "Technical"),
        Skill::new("Python", SkillLevel::Intermediate, "Technical"),
        Skill::new("Spanish", SkillLevel::Advanced, "Language"),
        Skill::new("Leadership", SkillLevel::Advanced, "Soft Skills"),
        Skill::new("Problem Solving", SkillLevel::Expert, "Soft Skills"),
    ];

    resume
}

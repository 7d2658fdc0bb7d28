//! Stateless share links.
//!
//! # Responsibility
//! - Encode an entire resume into a URL query parameter.
//!
//! Best-effort sharing only: the link carries all data itself, so it is
//! size-limited and backed by no storage.

use crate::model::resume::Resume;

/// Builds a share URL embedding the full resume as encoded JSON.
pub fn share_link(resume: &Resume, base_url: &str) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(resume)?;
    let encoded = urlencoding::encode(&json);
    Ok(format!(
        "{}/resume/{}?data={}",
        base_url.trim_end_matches('/'),
        resume.id,
        encoded
    ))
}

#[cfg(test)]
mod tests {
    use super::share_link;
    use crate::model::resume::Resume;

    #[test]
    fn link_embeds_id_and_encoded_payload() {
        let mut resume = Resume::empty(1_000);
        resume.personal_info.full_name = "Sarah Johnson".to_string();

        let link = share_link(&resume, "https://resumecraft.local/").expect("resume encodes");
        assert!(link.starts_with(&format!(
            "https://resumecraft.local/resume/{}?data=",
            resume.id
        )));
        assert!(link.contains("Sarah%20Johnson"));
        assert!(!link.contains(' '));
    }
}

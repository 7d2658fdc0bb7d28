use resumecraft_core::export::pdf::PdfResult;
use resumecraft_core::render::document::ResumeDocument;
use resumecraft_core::{
    export_html, export_pdf, sample_resume, share_link, ExportOutcome, PdfConverter, PdfError,
    Resume, PDF_RECOVERY_INSTRUCTIONS,
};

/// Converter stub that always succeeds with fixed bytes.
struct StubConverter;

impl PdfConverter for StubConverter {
    fn convert(&self, _document: &ResumeDocument) -> PdfResult<Vec<u8>> {
        Ok(b"%PDF-stub".to_vec())
    }
}

/// Converter stub simulating an unreliable backend.
struct FailingConverter;

impl PdfConverter for FailingConverter {
    fn convert(&self, _document: &ResumeDocument) -> PdfResult<Vec<u8>> {
        Err(PdfError::Render("simulated backend failure".to_string()))
    }
}

#[test]
fn export_html_writes_named_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let resume = sample_resume(1_000);

    let path = export_html(&resume, dir.path()).unwrap();
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("Sarah_Johnson_Resume.html")
    );

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Sarah Johnson"));
    assert!(html.contains("Professional Experience"));
}

#[test]
fn export_pdf_writes_pdf_when_conversion_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let resume = sample_resume(1_000);

    let outcome = export_pdf(&resume, dir.path(), &StubConverter).unwrap();
    match outcome {
        ExportOutcome::Pdf(path) => {
            assert_eq!(
                path.file_name().and_then(|name| name.to_str()),
                Some("Sarah_Johnson_Resume.pdf")
            );
            assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-stub");
        }
        other => panic!("expected pdf outcome, got {other:?}"),
    }
}

#[test]
fn export_pdf_falls_back_to_html_with_recovery_instructions() {
    let dir = tempfile::tempdir().unwrap();
    let resume = sample_resume(1_000);

    let outcome = export_pdf(&resume, dir.path(), &FailingConverter).unwrap();
    match outcome {
        ExportOutcome::HtmlFallback { path, instructions } => {
            assert_eq!(
                path.file_name().and_then(|name| name.to_str()),
                Some("Sarah_Johnson_Resume.html")
            );
            assert_eq!(instructions, PDF_RECOVERY_INSTRUCTIONS);
            assert!(instructions.contains("Save as PDF"));

            let html = std::fs::read_to_string(&path).unwrap();
            assert!(html.contains("Sarah Johnson"));
        }
        other => panic!("expected fallback outcome, got {other:?}"),
    }
}

#[test]
fn blank_name_exports_under_plain_resume_name() {
    let dir = tempfile::tempdir().unwrap();
    let resume = Resume::empty(1_000);

    let path = export_html(&resume, dir.path()).unwrap();
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("Resume.html")
    );
}

#[test]
fn share_link_round_trips_resume_payload() {
    let resume = sample_resume(1_000);
    let link = share_link(&resume, "https://resumecraft.local").unwrap();

    let (_, query) = link.split_once("?data=").expect("data parameter present");
    let decoded = urlencoding::decode(query).unwrap();
    let parsed: Resume = serde_json::from_str(&decoded).unwrap();
    assert_eq!(parsed, resume);
}

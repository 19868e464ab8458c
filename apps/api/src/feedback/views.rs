//! HTML views for the feedback form. Rendered with askama, which escapes all text.

use askama::Template;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::models::feedback::FeedbackReport;
use crate::report::{REPORT_FILENAME, REPORT_MIME};

pub const MISSING_RESUME_WARNING: &str = "Please upload your resume PDF first.";

/// The single page of the app: the form plus whichever panels apply.
#[derive(Template)]
#[template(path = "feedback.html")]
pub struct FeedbackPage {
    pub job_description: String,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub resume_feedback: Option<String>,
    pub comparison_feedback: Option<String>,
    pub download_href: Option<String>,
    pub download_filename: &'static str,
}

impl FeedbackPage {
    pub fn blank() -> Self {
        Self {
            job_description: String::new(),
            warning: None,
            error: None,
            resume_feedback: None,
            comparison_feedback: None,
            download_href: None,
            download_filename: REPORT_FILENAME,
        }
    }

    pub fn with_warning(job_description: String, warning: &str) -> Self {
        Self {
            job_description,
            warning: Some(warning.to_string()),
            ..Self::blank()
        }
    }

    pub fn with_error(job_description: String, message: String) -> Self {
        Self {
            job_description,
            error: Some(message),
            ..Self::blank()
        }
    }

    pub fn with_report(job_description: String, report: FeedbackReport, pdf: &[u8]) -> Self {
        Self {
            job_description,
            resume_feedback: Some(report.resume_feedback),
            comparison_feedback: report.comparison_feedback,
            download_href: Some(pdf_data_uri(pdf)),
            ..Self::blank()
        }
    }
}

/// Inline `data:` URI so the report downloads without being stored server-side.
pub fn pdf_data_uri(pdf: &[u8]) -> String {
    format!("data:{REPORT_MIME};base64,{}", STANDARD.encode(pdf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_page_has_form_and_no_panels() {
        let html = FeedbackPage::blank().render().unwrap();

        assert!(html.contains("AI Recruitment Assistant"));
        assert!(html.contains(r#"accept="application/pdf,.pdf""#));
        assert!(html.contains("Get Feedback"));
        assert!(!html.contains("AI Feedback on Resume:"));
        assert!(!html.contains("Download Feedback Report"));
    }

    #[test]
    fn test_report_page_escapes_model_output() {
        let report = FeedbackReport {
            resume_feedback: "<script>alert(1)</script>".to_string(),
            comparison_feedback: None,
        };

        let html = FeedbackPage::with_report(String::new(), report, b"%PDF-1.5")
            .render()
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_report_page_links_pdf_as_data_uri() {
        let report = FeedbackReport {
            resume_feedback: "Strengths".to_string(),
            comparison_feedback: None,
        };

        let html = FeedbackPage::with_report(String::new(), report, b"%PDF-1.5")
            .render()
            .unwrap();

        assert!(html.contains(r#"href="data:application/pdf;base64,JVBERi0xLjU=""#));
        assert!(html.contains(r#"download="AI_Resume_Feedback.pdf""#));
        assert!(!html.contains("AI Comparison with Job Description:"));
    }

    #[test]
    fn test_pdf_data_uri_round_trips_bytes() {
        let uri = pdf_data_uri(b"%PDF-1.5");
        let encoded = uri.strip_prefix("data:application/pdf;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), b"%PDF-1.5");
    }
}

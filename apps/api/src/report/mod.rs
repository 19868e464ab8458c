//! Feedback report rendering: lays feedback text out on A4 pages and writes a PDF.
//!
//! Lines are taken verbatim from the feedback blocks, split on their own newlines.
//! There is no re-wrapping; a line wider than the page runs past the right margin.
//!
//! Unlike a single-canvas layout, the body is paginated: once the next line would
//! fall below the bottom margin a fresh page of the same size starts.

pub mod layout;
pub mod pdf;

use thiserror::Error;
use tracing::debug;

use crate::models::feedback::FeedbackReport;

pub use layout::layout_report;

/// File name offered for the generated report download.
pub const REPORT_FILENAME: &str = "AI_Resume_Feedback.pdf";
pub const REPORT_MIME: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0} feedback is empty; nothing to render")]
    EmptyBlock(&'static str),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Lays out and serialises a feedback report into PDF bytes.
pub fn render_report(report: &FeedbackReport) -> Result<Vec<u8>, RenderError> {
    let layout = layout_report(
        &report.resume_feedback,
        report.comparison_feedback.as_deref(),
    )?;
    debug!(
        "Rendering report: pages={}, body_lines={}",
        layout.pages.len(),
        layout.body_lines().len()
    );
    layout.to_pdf()
}

#[cfg(test)]
mod tests {
    use lopdf::Document;

    use super::*;

    #[test]
    fn test_render_report_returns_single_a4_page_for_short_feedback() {
        let report = FeedbackReport {
            resume_feedback: "Strengths: clear\nWeaknesses: none".to_string(),
            comparison_feedback: None,
        };

        let bytes = render_report(&report).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();

        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_render_report_text_is_extractable_in_order() {
        let report = FeedbackReport {
            resume_feedback: "Strengths: clear".to_string(),
            comparison_feedback: Some("Aligned: Go".to_string()),
        };

        let bytes = render_report(&report).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let text = doc.extract_text(&[1]).unwrap();

        let title = text.find("AI Resume Feedback Report").unwrap();
        let resume = text.find("Strengths: clear").unwrap();
        let heading = text.find("Job Description Comparison:").unwrap();
        let comparison = text.find("Aligned: Go").unwrap();
        assert!(title < resume && resume < heading && heading < comparison);
    }

    #[test]
    fn test_render_report_rejects_empty_comparison_block() {
        let report = FeedbackReport {
            resume_feedback: "Strengths: clear".to_string(),
            comparison_feedback: Some("   ".to_string()),
        };

        assert!(matches!(
            render_report(&report),
            Err(RenderError::EmptyBlock("comparison"))
        ));
    }
}

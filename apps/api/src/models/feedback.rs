use serde::Serialize;

/// Feedback for one resume submission.
///
/// `comparison_feedback` is present exactly when a non-blank job description was supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackReport {
    pub resume_feedback: String,
    pub comparison_feedback: Option<String>,
}

impl FeedbackReport {
    pub fn has_comparison(&self) -> bool {
        self.comparison_feedback.is_some()
    }
}

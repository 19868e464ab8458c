//! Pure construction of the feedback prompts from the submitted text.

use crate::feedback::prompts::{COMPARISON_PROMPT_TEMPLATE, RESUME_FEEDBACK_PROMPT_TEMPLATE};

/// Prompts for one submission. `comparison` exists only when a job description was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackPrompts {
    pub resume: String,
    pub comparison: Option<String>,
}

impl FeedbackPrompts {
    pub fn prompt_count(&self) -> usize {
        1 + usize::from(self.comparison.is_some())
    }
}

/// Returns the job description if it carries any non-whitespace text.
pub fn supplied_job_description(job_description: Option<&str>) -> Option<&str> {
    job_description.map(str::trim).filter(|jd| !jd.is_empty())
}

pub fn build_prompts(resume_text: &str, job_description: Option<&str>) -> FeedbackPrompts {
    let resume = RESUME_FEEDBACK_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

    let comparison = supplied_job_description(job_description).map(|jd| {
        COMPARISON_PROMPT_TEMPLATE
            .replace("{resume_text}", resume_text)
            .replace("{job_description}", jd)
    });

    FeedbackPrompts { resume, comparison }
}

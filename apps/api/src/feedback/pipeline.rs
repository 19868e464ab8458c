//! Feedback pipeline: prompt building followed by the completion calls.
//!
//! Flow: build_prompts → resume completion → (comparison completion) → FeedbackReport.
//! Calls run one after the other; the first failure aborts the request.

use tracing::info;

use crate::errors::AppError;
use crate::feedback::builder::build_prompts;
use crate::llm_client::CompletionService;
use crate::models::feedback::FeedbackReport;

pub async fn request_feedback(
    service: &dyn CompletionService,
    resume_text: &str,
    job_description: Option<&str>,
) -> Result<FeedbackReport, AppError> {
    let prompts = build_prompts(resume_text, job_description);
    info!(
        "Requesting resume feedback ({} prompt(s))",
        prompts.prompt_count()
    );

    let resume_feedback = service.complete(&prompts.resume).await?;

    let comparison_feedback = match prompts.comparison.as_deref() {
        Some(prompt) => Some(service.complete(prompt).await?),
        None => None,
    };

    Ok(FeedbackReport {
        resume_feedback,
        comparison_feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::fake::ScriptedCompletions;
    use crate::llm_client::LlmError;

    const RESUME: &str = "John Doe, 5 years Python experience.\n";

    #[tokio::test]
    async fn test_resume_only_makes_one_call() {
        let service = ScriptedCompletions::replying(&["  Strengths: solid Python  "]);

        let report = request_feedback(&service, RESUME, Some("  ")).await.unwrap();

        assert_eq!(report.resume_feedback, "Strengths: solid Python");
        assert!(!report.has_comparison());
        assert_eq!(service.call_count(), 1);
    }

    #[tokio::test]
    async fn test_job_description_adds_comparison_in_order() {
        let service = ScriptedCompletions::replying(&["resume reply", "comparison reply"]);

        let report = request_feedback(&service, RESUME, Some("Senior Go Engineer, 5+ years"))
            .await
            .unwrap();

        assert_eq!(report.resume_feedback, "resume reply");
        assert_eq!(report.comparison_feedback.as_deref(), Some("comparison reply"));
        let prompts = service.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(!prompts[0].contains("Senior Go Engineer"));
        assert!(prompts[1].contains("Senior Go Engineer, 5+ years"));
    }

    #[tokio::test]
    async fn test_resume_call_failure_skips_comparison() {
        let service = ScriptedCompletions::new([
            Err(LlmError::Unauthorized {
                status: 401,
                message: "Invalid API Key".to_string(),
            }),
            Ok("never used".to_string()),
        ]);

        let err = request_feedback(&service, RESUME, Some("Rust"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Request(LlmError::Unauthorized { .. })));
        assert_eq!(service.call_count(), 1);
    }

    #[tokio::test]
    async fn test_comparison_failure_discards_resume_feedback() {
        let service = ScriptedCompletions::new([
            Ok("resume reply".to_string()),
            Err(LlmError::EmptyContent),
        ]);

        let result = request_feedback(&service, RESUME, Some("Rust")).await;

        assert!(matches!(result, Err(AppError::Request(LlmError::EmptyContent))));
    }
}

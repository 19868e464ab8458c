//! Axum route handlers for the Feedback form and API.

use askama::Template;
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use tracing::{debug, info};

use crate::document::extract_resume_text;
use crate::errors::AppError;
use crate::feedback::builder::supplied_job_description;
use crate::feedback::pipeline::request_feedback;
use crate::feedback::views::{FeedbackPage, MISSING_RESUME_WARNING};
use crate::models::feedback::FeedbackReport;
use crate::report::{render_report, REPORT_FILENAME, REPORT_MIME};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Fields of the multipart feedback form.
#[derive(Debug, Default)]
pub struct FeedbackForm {
    /// `None` when no file was chosen or the upload was empty.
    pub resume: Option<Bytes>,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub resume_feedback: String,
    pub comparison_feedback: Option<String>,
    pub report_filename: &'static str,
    pub report_pdf_base64: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Reads the `resume` and `job_description` parts; unknown parts are ignored.
pub async fn read_feedback_form(mut multipart: Multipart) -> Result<FeedbackForm, AppError> {
    let mut form = FeedbackForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                debug!(
                    "Resume upload: file_name={:?}, content_type={:?}",
                    field.file_name(),
                    field.content_type()
                );
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read resume: {e}")))?;
                form.resume = (!bytes.is_empty()).then_some(bytes);
            }
            Some("job_description") => {
                form.job_description = field.text().await.map_err(|e| {
                    AppError::Validation(format!("failed to read job description: {e}"))
                })?;
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Runs extraction, the completion calls, and report rendering for one submission.
///
/// Returns the feedback together with the rendered PDF; nothing partial on failure.
pub async fn generate_feedback(
    state: &AppState,
    form: &FeedbackForm,
) -> Result<(FeedbackReport, Vec<u8>), AppError> {
    let resume = form
        .resume
        .clone()
        .ok_or_else(|| AppError::MissingInput(MISSING_RESUME_WARNING.to_string()))?;

    let resume_text = tokio::task::spawn_blocking(move || extract_resume_text(&resume))
        .await
        .map_err(|e| anyhow::anyhow!("resume extraction task failed: {e}"))??;

    let job_description = supplied_job_description(Some(&form.job_description));
    let report = request_feedback(state.completion.as_ref(), &resume_text, job_description).await?;

    let to_render = report.clone();
    let pdf = tokio::task::spawn_blocking(move || render_report(&to_render))
        .await
        .map_err(|e| anyhow::anyhow!("report rendering task failed: {e}"))??;

    info!(
        "Feedback report ready: comparison={}, pdf_bytes={}",
        report.has_comparison(),
        pdf.len()
    );
    Ok((report, pdf))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    render_page(FeedbackPage::blank())
}

/// POST /feedback
///
/// Form submission from the browser. Failures are shown on the page, never as an
/// error status: a missing upload gives a warning, anything else one error panel.
pub async fn handle_feedback_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let form = match read_feedback_form(multipart).await {
        Ok(form) => form,
        Err(err) => {
            err.log();
            return render_page(FeedbackPage::with_error(String::new(), err.user_message()));
        }
    };

    if form.resume.is_none() {
        return render_page(FeedbackPage::with_warning(
            form.job_description,
            MISSING_RESUME_WARNING,
        ));
    }

    let page = match generate_feedback(&state, &form).await {
        Ok((report, pdf)) => FeedbackPage::with_report(form.job_description, report, &pdf),
        Err(err) => {
            err.log();
            FeedbackPage::with_error(form.job_description, err.user_message())
        }
    };
    render_page(page)
}

/// POST /api/v1/feedback
///
/// Same pipeline as the form, returned as JSON with the report base64-encoded.
pub async fn handle_feedback_api(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<FeedbackResponse>, AppError> {
    let form = read_feedback_form(multipart).await?;
    let (report, pdf) = generate_feedback(&state, &form).await?;

    Ok(Json(FeedbackResponse {
        resume_feedback: report.resume_feedback,
        comparison_feedback: report.comparison_feedback,
        report_filename: REPORT_FILENAME,
        report_pdf_base64: STANDARD.encode(pdf),
    }))
}

/// POST /api/v1/feedback/report
///
/// Returns the rendered report as a PDF attachment.
pub async fn handle_feedback_report(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = read_feedback_form(multipart).await?;
    let (_, pdf) = generate_feedback(&state, &form).await?;

    Ok((
        [
            (header::CONTENT_TYPE, REPORT_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}

fn render_page(page: FeedbackPage) -> Result<Html<String>, AppError> {
    let html = page.render().map_err(anyhow::Error::from)?;
    Ok(Html(html))
}

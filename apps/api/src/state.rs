use std::sync::Arc;

use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, a scripted fake in tests.
    pub completion: Arc<dyn CompletionService>,
    /// Upper bound on a multipart request body, upload included.
    pub max_upload_bytes: usize,
}

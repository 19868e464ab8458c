pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::feedback::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Browser form
        .route("/", get(handlers::handle_index))
        .route("/feedback", post(handlers::handle_feedback_form))
        // Feedback API
        .route("/api/v1/feedback", post(handlers::handle_feedback_api))
        .route(
            "/api/v1/feedback/report",
            post(handlers::handle_feedback_report),
        )
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .with_state(state)
}

//! Axum router: maps URL paths to handlers.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    api::{api_analyze, api_list_analyses, api_show_analysis},
    pages::{index, prompt_form, prompt_submit, show_analysis},
    upload::upload,
};
use crate::state::AppState;

/// Build the full router.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_content_length;

    Router::new()
        // Pages
        .route("/", get(index))
        .route("/upload", post(upload))
        .route("/analyses/{id}", get(show_analysis))
        .route("/generate_prompt", get(prompt_form).post(prompt_submit))
        // API endpoints
        .route("/api/analyze", post(api_analyze))
        .route("/api/analyses", get(api_list_analyses))
        .route("/api/analyses/{id}", get(api_show_analysis))
        // Middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::summary::handlers;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/models", get(handlers::handle_list_models))
        .route(
            "/api/v1/summaries",
            post(handlers::handle_summarize).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

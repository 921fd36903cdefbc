pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::catalog::handlers as catalog;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analyses",
            post(analysis::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Keyword catalog API
        .route("/api/v1/keywords", get(catalog::handle_list_keywords))
        .route("/api/v1/keywords/seed", post(catalog::handle_seed_keywords))
        .with_state(state)
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Job API
        .route("/api/v1/job/upload", post(handlers::handle_upload_job))
        .route("/api/v1/job", get(handlers::handle_get_job))
        .with_state(state)
}

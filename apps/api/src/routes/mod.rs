pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::folding::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/patterns", post(handlers::handle_generate_pattern))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route(
            "/api/v1/templates/pattern",
            post(handlers::handle_template_pattern),
        )
        .route(
            "/api/v1/patterns/export",
            post(handlers::handle_export_pattern),
        )
        .with_state(state)
}

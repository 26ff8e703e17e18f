pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor_handlers;
use crate::recommender::handlers as recommender_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Offline rule-based path
        .route(
            "/api/v1/schemes/recommend",
            post(recommender_handlers::handle_recommend),
        )
        // Remote model path
        .route(
            "/api/v1/schemes/advise",
            post(advisor_handlers::handle_advise),
        )
        .route("/api/v1/models", get(advisor_handlers::handle_list_models))
        .with_state(state)
}

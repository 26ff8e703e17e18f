use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus the startup probe result for the advisor backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "schemesetu-api",
        "advisor_backend": state.backend,
        "advisor_available": state.backend.is_available(),
        "models": state.config.gemini_models
    }))
}

//! Axum route handlers for the rule-based recommender.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::CitizenProfile;
use crate::models::scheme::{consolidated_documents, SchemeRecommendation};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub recommendations: [SchemeRecommendation; 3],
    /// Deduplicated, sorted documents across all three recommendations.
    pub documents: Vec<String>,
}

/// POST /api/v1/schemes/recommend
///
/// Offline path: three catalog recommendations, no network access.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<CitizenProfile>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let Json(profile) = payload?;
    let request_id = Uuid::new_v4();
    let recommendations = state.engine.recommend(&profile);
    let documents = consolidated_documents(&recommendations);

    info!(
        %request_id,
        schemes = ?recommendations.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        "Rule-based recommendations served"
    );

    Ok(Json(RecommendResponse {
        request_id,
        generated_at: Utc::now(),
        recommendations,
        documents,
    }))
}

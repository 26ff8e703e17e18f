//! Axum route handlers for the remote advisor.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{AdvisorCredential, AdvisorError, FinishReason};
use crate::models::profile::CitizenProfile;
use crate::state::AppState;

/// Request header carrying a caller-supplied API key.
pub const ADVISOR_KEY_HEADER: &str = "x-advisor-key";

#[derive(Debug, Serialize)]
pub struct AdviseResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub text: String,
    pub truncated: bool,
    pub finish_reason: FinishReason,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// The caller-supplied key, if the request carries one.
fn header_key(headers: &HeaderMap) -> Result<Option<&str>, AdvisorError> {
    headers
        .get(ADVISOR_KEY_HEADER)
        .map(|value| {
            value.to_str().map_err(|_| {
                AdvisorError::InvalidCredential("API key header is not valid text".to_string())
            })
        })
        .transpose()
}

fn server_credential(state: &AppState) -> Result<AdvisorCredential, AdvisorError> {
    state.server_credential.clone().ok_or_else(|| {
        AdvisorError::InvalidCredential(format!(
            "no API key provided; send the {ADVISOR_KEY_HEADER} header"
        ))
    })
}

/// Picks the caller's key when present, otherwise the server's.
fn resolve_credential(state: &AppState, headers: &HeaderMap) -> Result<AdvisorCredential, AdvisorError> {
    match header_key(headers)? {
        Some(raw) => AdvisorCredential::parse(raw),
        None => server_credential(state),
    }
}

/// POST /api/v1/schemes/advise
///
/// Remote path: model-written advice in the profile's language. Failures are
/// returned as-is; offering the rule-based fallback is the caller's decision.
pub async fn handle_advise(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CitizenProfile>, JsonRejection>,
) -> Result<Json<AdviseResponse>, AppError> {
    let Json(profile) = payload?;
    let request_id = Uuid::new_v4();
    let advice = match header_key(&headers)? {
        Some(raw) => state.advisor.generate_for_key(raw, &profile).await,
        None => {
            let credential = server_credential(&state)?;
            state.advisor.generate(&credential, &profile).await
        }
    }
    .inspect_err(|e| warn!(%request_id, "Advice request failed: {e}"))?;

    info!(%request_id, model = %advice.model, "Advice served");

    Ok(Json(AdviseResponse {
        request_id,
        generated_at: Utc::now(),
        model: advice.model,
        text: advice.text,
        truncated: advice.truncated,
        finish_reason: advice.finish_reason,
    }))
}

/// GET /api/v1/models
///
/// Lists the models the credential can use for generation.
pub async fn handle_list_models(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ModelsResponse>, AppError> {
    let credential = resolve_credential(&state, &headers)?;
    let models = state.advisor.llm().list_models(&credential).await?;
    Ok(Json(ModelsResponse { models }))
}

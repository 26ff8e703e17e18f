use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::AdvisorError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Advisor(#[from] AdvisorError),
}

/// Malformed or out-of-range request bodies surface as validation errors.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Advisor(err) => {
                let (status, code) = advisor_status(err);
                if status.is_server_error() {
                    tracing::error!("Advisor error: {err}");
                }
                (status, code, err.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

fn advisor_status(err: &AdvisorError) -> (StatusCode, &'static str) {
    match err {
        AdvisorError::InvalidCredential(_) => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIAL"),
        AdvisorError::ModelUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "MODEL_UNAVAILABLE"),
        AdvisorError::QuotaExceeded => (StatusCode::TOO_MANY_REQUESTS, "QUOTA_EXCEEDED"),
        AdvisorError::NetworkFailure(_) => (StatusCode::GATEWAY_TIMEOUT, "NETWORK_FAILURE"),
        AdvisorError::ResponseBlocked(_) => (StatusCode::UNPROCESSABLE_ENTITY, "RESPONSE_BLOCKED"),
        AdvisorError::MalformedResponse(_) => (StatusCode::BAD_GATEWAY, "MALFORMED_RESPONSE"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_advisor_error_has_distinct_code() {
        let errors = [
            AdvisorError::InvalidCredential(String::new()),
            AdvisorError::ModelUnavailable(String::new()),
            AdvisorError::QuotaExceeded,
            AdvisorError::NetworkFailure(String::new()),
            AdvisorError::ResponseBlocked(String::new()),
            AdvisorError::MalformedResponse(String::new()),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| advisor_status(e).1).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Advisor(AdvisorError::InvalidCredential("x".into())),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::Advisor(AdvisorError::QuotaExceeded),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                AppError::Advisor(AdvisorError::ResponseBlocked("x".into())),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}

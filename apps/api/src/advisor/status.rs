//! One-time reachability check of the text-generation backend.
//!
//! Computed at startup and handed to `AppState`; nothing updates it afterwards.

use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::{AdvisorCredential, GeminiClient};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BackendStatus {
    /// The server credential works and these configured models are served.
    Available { models: Vec<String> },
    /// No server-side key; callers must send their own.
    NoServerCredential,
    Unreachable { reason: String },
}

impl BackendStatus {
    pub async fn probe(client: &GeminiClient, credential: Option<&AdvisorCredential>) -> Self {
        let Some(credential) = credential else {
            info!("No server-side advisor credential configured; remote advice requires a client key");
            return BackendStatus::NoServerCredential;
        };

        match client.list_models(credential).await {
            Ok(served) => {
                let models: Vec<String> = client
                    .models()
                    .iter()
                    .filter(|m| served.contains(m))
                    .cloned()
                    .collect();
                if models.is_empty() {
                    warn!("None of the configured models are served by the backend");
                    BackendStatus::Unreachable {
                        reason: "none of the configured models are served".to_string(),
                    }
                } else {
                    info!("Advisor backend available: {}", models.join(", "));
                    BackendStatus::Available { models }
                }
            }
            Err(e) => {
                warn!("Advisor backend probe failed: {e}");
                BackendStatus::Unreachable {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, BackendStatus::Available { .. })
    }
}

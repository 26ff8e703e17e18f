use std::sync::Arc;

use crate::advisor::status::BackendStatus;
use crate::advisor::RemoteAdvisorClient;
use crate::config::Config;
use crate::llm_client::AdvisorCredential;
use crate::recommender::ProfileRuleEngine;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: Arc<ProfileRuleEngine>,
    pub advisor: RemoteAdvisorClient,
    /// Shape-checked `GEMINI_API_KEY`, used when a request carries no key.
    pub server_credential: Option<AdvisorCredential>,
    /// Result of the startup reachability probe.
    pub backend: BackendStatus,
}

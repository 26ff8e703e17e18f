mod advisor;
mod config;
mod errors;
mod llm_client;
mod models;
mod recommender;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::status::BackendStatus;
use crate::advisor::RemoteAdvisorClient;
use crate::config::Config;
use crate::llm_client::transport::ReqwestTransport;
use crate::llm_client::{AdvisorCredential, GeminiClient};
use crate::recommender::catalog::RuleCatalog;
use crate::recommender::ProfileRuleEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http=info",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SchemeSetu API v{}", env!("CARGO_PKG_VERSION"));

    // Load and validate the scheme catalog
    let catalog = match &config.scheme_catalog_path {
        Some(path) => {
            info!("Loading scheme catalog from {}", path.display());
            RuleCatalog::from_json_file(path)?
        }
        None => RuleCatalog::builtin(),
    };
    let engine = ProfileRuleEngine::new(catalog).context("scheme catalog is invalid")?;
    info!(
        "Rule engine ready ({} rules, {} generic schemes)",
        engine.catalog().rules.len(),
        engine.catalog().generic.len()
    );

    // Initialize LLM client
    let transport =
        ReqwestTransport::new(config.advisor_timeout).context("failed to build HTTP client")?;
    let llm = GeminiClient::new(
        Arc::new(transport),
        config.gemini_api_base.clone(),
        config.gemini_models.clone(),
    );
    info!("LLM client initialized (models: {})", llm.models().join(", "));

    // A malformed server key is not fatal; the offline path still works.
    let server_credential = match config.gemini_api_key.as_deref().map(AdvisorCredential::parse) {
        Some(Ok(credential)) => Some(credential),
        Some(Err(e)) => {
            warn!("Ignoring GEMINI_API_KEY: {e}");
            None
        }
        None => None,
    };

    let backend = BackendStatus::probe(&llm, server_credential.as_ref()).await;

    // Build app state
    let state = AppState {
        config: config.clone(),
        engine: Arc::new(engine),
        advisor: RemoteAdvisorClient::new(llm),
        server_credential,
        backend,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web frontend has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

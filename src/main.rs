// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::powerbi_service::PowerBiService;
use crate::application::token_cache::{SystemClock, TokenCache};
use crate::infrastructure::azure_identity::AzureAdClient;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::powerbi_client::PowerBiHttpClient;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let settings = load_settings()?;
    if !settings.powerbi.is_complete() {
        tracing::warn!("Power BI credentials are not configured; every API call will fail to authenticate");
    }

    // One pooled HTTP client for Azure AD and the Power BI API
    let http = reqwest::Client::new();

    // Adapters (infrastructure layer)
    let identity = Arc::new(AzureAdClient::new(http.clone(), settings.powerbi.clone()));
    let gateway = Arc::new(PowerBiHttpClient::new(http, &settings.powerbi.api_url));

    // Services (application layer)
    let tokens = Arc::new(TokenCache::new(identity, Arc::new(SystemClock)));
    let powerbi_service = PowerBiService::new(tokens, gateway);

    let state = Arc::new(AppState { powerbi_service });

    // Build router (presentation layer)
    let router = build_router(state);

    let addr = settings.server.addr()?;
    tracing::info!("Starting powerbi-explorer on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

mod activities;
mod auth;
mod config;
mod errors;
mod extract;
mod fixtures;
mod llm_client;
mod models;
mod portfolio;
mod resume;
mod results;
mod review;
mod routes;
mod search;
mod state;
mod stats;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::resume::{ResumeDrafter, ResumeGenerator};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::HubStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Student Hub API v{}", env!("CARGO_PKG_VERSION"));

    let store = HubStore::seeded();
    info!(
        "Seeded {} students, {} activities, {} certificates",
        store.students.len(),
        store.activities.len(),
        store.certificates.len()
    );

    // Resume drafting goes through the generative API only when a key is set
    let resume_generator = match &config.gemini_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), config.gemini_api_url.clone());
            info!("Resume drafting enabled");
            ResumeGenerator::new(Some(Arc::new(client) as Arc<dyn ResumeDrafter>))
        }
        None => {
            info!("GEMINI_API_KEY not set, resumes use the built-in template");
            ResumeGenerator::template_only()
        }
    };

    let state = AppState::new(store.into_shared(), resume_generator, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod state;
mod summary;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::llm_client::models::default_model;
use crate::llm_client::GroqClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::summary::credentials::CredentialResolver;
use crate::summary::summarizer::Summarizer;

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

    info!("Starting Resume Summarizer v{}", env!("CARGO_PKG_VERSION"));

    let llm = Arc::new(GroqClient::new(config.groq_api_url.clone()));
    info!(
        "LLM client initialized (endpoint: {}, default model: {})",
        config.groq_api_url,
        default_model()
    );

    // GROQ_API_KEY is looked up per request, secrets file first.
    let credentials = Arc::new(CredentialResolver::standard(&config.secrets_file));
    info!("Credential sources: {} then environment", config.secrets_file);

    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(PdfTextExtractor),
        summarizer: Summarizer::new(llm, credentials),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the upload front-end's origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

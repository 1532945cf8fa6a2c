//! Sentimyx Web Server
//!
//! Run with: cargo run -p sentimyx-web

use sentimyx_web::config::{AppConfig, ENV_API_KEY};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Ok(path) = dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    info!("Starting Sentimyx Web Server...");

    let config = AppConfig::load()?;
    if config.has_api_key() {
        info!(model = %config.llm.model, base_url = %config.llm.base_url, "LLM backend configured");
    } else {
        warn!("{} not set; /sentiment will answer 503 until it is configured", ENV_API_KEY);
    }

    let state = sentimyx_web::state::AppState::from_config(&config);
    let app = sentimyx_web::router::build_router(state);

    let addr = config.server.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

//! radar-server — Radar Fiscal landing-page backend
//!
//! Long-running service that:
//! - Captures marketing leads into PostgreSQL
//! - Issues mock session tokens (JWT)
//! - Serves denylist metadata for the landing page
//! - Audits uploaded CFDI XML files against the SAT 69-B denylist

mod api;
mod audit;
mod config;
mod db;
mod error;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "radar_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting radar-server (env: {})", config.environment);

    // Initialize application state
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("radar-server HTTP listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

//! Fakt API server.
//!
//! Main entry point for the invoice front-end service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fakt_api::{AppState, create_router};
use fakt_db::{connect, repositories::LedgerSettings};
use fakt_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fakt=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to the bookkeeping store
    let db = connect(&config.database)
        .await
        .context("Failed to connect to the bookkeeping store")?;
    info!("Connected to the bookkeeping store");

    // Resolve ledger interpretation settings
    let ledger = LedgerSettings::from_config(&config.ledger)?;
    info!(
        timezone = %ledger.timezone,
        internal_action = %ledger.internal_action,
        "Ledger settings resolved"
    );

    // Create application state and router
    let state = AppState {
        db: Arc::new(db),
        ledger,
    };
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the invoice, customer, company and option
//!   repositories
//! - Response types with monetary figures rendered as decimal strings
//!   and timestamps as RFC 3339

pub mod routes;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use fakt_db::repositories::LedgerSettings;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool over the bookkeeping store.
    pub db: Arc<DatabaseConnection>,
    /// Resolved ledger interpretation settings.
    pub ledger: LedgerSettings,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

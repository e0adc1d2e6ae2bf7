//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions mirroring the externally managed
//!   bookkeeping schema (read-only) plus the application's own
//!   `options` table
//! - Repository abstractions for data access, including the invoice
//!   aggregation engine
//!
//! There is no migration module: the bookkeeping schema belongs to the
//! external accounting system and is never created or altered here.

pub mod entities;
pub mod repositories;
pub mod testing;

pub use repositories::{
    CompanyRepository, CustomerRepository, InvoiceRepository, LedgerSettings, OptionRepository,
};

use fakt_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection pool to the bookkeeping store.
///
/// SQLite, MySQL and PostgreSQL URLs are accepted; the scheme selects
/// the backend.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);
    Database::connect(options).await
}

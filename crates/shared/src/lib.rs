//! Shared types, errors, and configuration for Fakt.
//!
//! This crate provides common types used across all other crates:
//! - Exact rational amounts as stored in the ledger
//! - GUID identifiers for ledger entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

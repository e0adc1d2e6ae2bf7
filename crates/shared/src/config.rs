//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Ledger interpretation settings.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
///
/// The URL points at the bookkeeping store. SQLite file, MySQL and
/// PostgreSQL URLs are all accepted; the scheme selects the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Ledger interpretation settings.
///
/// The bookkeeping store records posted timestamps in UTC and marks
/// balancing splits with an internal action label. Both conventions are
/// configurable rather than ambient globals.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// IANA time zone used for due-date arithmetic (e.g. "Europe/Oslo").
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Action label marking internal bookkeeping splits, which are
    /// excluded from an invoice's transaction listing.
    #[serde(default = "default_internal_action")]
    pub internal_action: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            internal_action: default_internal_action(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_internal_action() -> String {
    "Auto Split".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FAKT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

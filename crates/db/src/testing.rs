//! Test support: an in-memory store shaped like the external schema.
//!
//! Integration tests across the workspace build their fixtures on a
//! SQLite rendition of the table subset this application reads, plus
//! the app-owned `options` table. The DDL lives here once so the test
//! suites cannot drift apart.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};

/// The table subset this application reads, as SQLite DDL.
pub const SCHEMA: &str = "
CREATE TABLE customers (
    guid TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    addr_name TEXT,
    addr_addr1 TEXT,
    addr_addr2 TEXT,
    addr_addr3 TEXT,
    addr_addr4 TEXT
);
CREATE TABLE jobs (
    guid TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    owner_guid TEXT NOT NULL,
    owner_type INTEGER NOT NULL
);
CREATE TABLE billterms (
    guid TEXT PRIMARY KEY,
    duedays INTEGER NOT NULL
);
CREATE TABLE taxtable_entries (
    id INTEGER PRIMARY KEY,
    taxtable TEXT NOT NULL,
    amount_num BIGINT NOT NULL,
    amount_denom BIGINT NOT NULL
);
CREATE TABLE entries (
    guid TEXT PRIMARY KEY,
    invoice TEXT,
    description TEXT NOT NULL,
    action TEXT,
    quantity_num BIGINT NOT NULL,
    quantity_denom BIGINT NOT NULL,
    i_price_num BIGINT NOT NULL,
    i_price_denom BIGINT NOT NULL,
    i_discount_num BIGINT NOT NULL,
    i_discount_denom BIGINT NOT NULL,
    i_taxtable TEXT,
    i_taxable INTEGER NOT NULL,
    i_taxincluded INTEGER NOT NULL
);
CREATE TABLE transactions (
    guid TEXT PRIMARY KEY,
    post_date TEXT
);
CREATE TABLE splits (
    guid TEXT PRIMARY KEY,
    tx_guid TEXT NOT NULL,
    lot_guid TEXT,
    action TEXT NOT NULL,
    value_num BIGINT NOT NULL,
    value_denom BIGINT NOT NULL
);
CREATE TABLE invoices (
    guid TEXT PRIMARY KEY,
    id TEXT NOT NULL,
    terms TEXT,
    notes TEXT,
    date_opened TEXT,
    date_posted TEXT,
    owner_guid TEXT NOT NULL,
    owner_type INTEGER NOT NULL,
    post_lot TEXT
);
CREATE TABLE slots (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    string_val TEXT
);
CREATE TABLE options (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    key TEXT NOT NULL,
    lang TEXT NOT NULL,
    value TEXT
);
";

/// Opens a fresh in-memory SQLite store with [`SCHEMA`] applied.
///
/// The pool is pinned to a single connection: an in-memory SQLite
/// database exists per connection, so a larger pool would hand each
/// query a different empty database.
///
/// # Errors
///
/// Returns an error if the connection or the DDL fails.
pub async fn memory_store() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);
    let db = Database::connect(options).await?;
    db.execute_unprepared(SCHEMA).await?;
    Ok(db)
}

/// Produces a deterministic 32-hex-digit guid from a small number.
#[must_use]
pub fn guid(n: u32) -> String {
    format!("{n:032x}")
}

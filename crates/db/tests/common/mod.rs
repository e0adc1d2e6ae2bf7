//! Shared fixtures for repository integration tests.
//!
//! The store itself comes from `fakt_db::testing`; this module adds
//! the typed helpers and seed functions the repository suites share.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};

use fakt_db::entities::{
    billterms, customers, entries, invoices, jobs, slots, splits, taxtable_entries, transactions,
};
use fakt_shared::types::Guid;

pub use fakt_db::testing::guid;

/// Connects a fresh in-memory store with the schema applied.
pub async fn store() -> DatabaseConnection {
    fakt_db::testing::memory_store()
        .await
        .expect("Failed to open in-memory store")
}

/// Same, parsed into the typed form.
pub fn typed_guid(n: u32) -> Guid {
    Guid::parse(&guid(n)).expect("fixture guid is valid")
}

/// A fixed timestamp for posted dates.
pub fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_hms_opt(h, min, 0)
        .expect("valid time")
}

pub async fn seed_customer(db: &DatabaseConnection, guid: &str, name: &str) {
    customers::ActiveModel {
        guid: Set(guid.to_string()),
        name: Set(name.to_string()),
        addr_name: Set(Some(name.to_string())),
        addr_addr1: Set(Some("Main Street 1".to_string())),
        addr_addr2: Set(Some("1234 Townsville".to_string())),
        addr_addr3: Set(None),
        addr_addr4: Set(None),
    }
    .insert(db)
    .await
    .expect("Failed to seed customer");
}

pub async fn seed_job(
    db: &DatabaseConnection,
    guid: &str,
    name: &str,
    owner_guid: &str,
    owner_type: i32,
) {
    jobs::ActiveModel {
        guid: Set(guid.to_string()),
        name: Set(name.to_string()),
        owner_guid: Set(owner_guid.to_string()),
        owner_type: Set(owner_type),
    }
    .insert(db)
    .await
    .expect("Failed to seed job");
}

pub async fn seed_billterm(db: &DatabaseConnection, guid: &str, duedays: i32) {
    billterms::ActiveModel {
        guid: Set(guid.to_string()),
        duedays: Set(duedays),
    }
    .insert(db)
    .await
    .expect("Failed to seed payment term");
}

pub async fn seed_tax_rate(db: &DatabaseConnection, taxtable: &str, num: i64, denom: i64) {
    taxtable_entries::ActiveModel {
        taxtable: Set(taxtable.to_string()),
        amount_num: Set(num),
        amount_denom: Set(denom),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed tax rate");
}

#[allow(clippy::too_many_arguments)]
pub async fn seed_invoice(
    db: &DatabaseConnection,
    guid: &str,
    number: &str,
    owner_guid: &str,
    owner_type: i32,
    terms: Option<&str>,
    date_posted: Option<NaiveDateTime>,
    post_lot: Option<&str>,
) {
    invoices::ActiveModel {
        guid: Set(guid.to_string()),
        id: Set(number.to_string()),
        terms: Set(terms.map(str::to_string)),
        notes: Set(None),
        date_opened: Set(Some(ts(2020, 1, 1, 9, 0))),
        date_posted: Set(date_posted),
        owner_guid: Set(owner_guid.to_string()),
        owner_type: Set(owner_type),
        post_lot: Set(post_lot.map(str::to_string)),
    }
    .insert(db)
    .await
    .expect("Failed to seed invoice");
}

#[allow(clippy::too_many_arguments)]
pub async fn seed_entry(
    db: &DatabaseConnection,
    guid: &str,
    invoice_guid: &str,
    description: &str,
    quantity: (i64, i64),
    price: (i64, i64),
    taxable: bool,
    taxtable: Option<&str>,
) {
    entries::ActiveModel {
        guid: Set(guid.to_string()),
        invoice: Set(Some(invoice_guid.to_string())),
        description: Set(description.to_string()),
        action: Set(Some("Hours".to_string())),
        quantity_num: Set(quantity.0),
        quantity_denom: Set(quantity.1),
        i_price_num: Set(price.0),
        i_price_denom: Set(price.1),
        i_discount_num: Set(0),
        i_discount_denom: Set(1),
        i_taxtable: Set(taxtable.map(str::to_string)),
        i_taxable: Set(i32::from(taxable)),
        i_taxincluded: Set(0),
    }
    .insert(db)
    .await
    .expect("Failed to seed entry");
}

pub async fn seed_transaction(db: &DatabaseConnection, guid: &str, post_date: Option<NaiveDateTime>) {
    transactions::ActiveModel {
        guid: Set(guid.to_string()),
        post_date: Set(post_date),
    }
    .insert(db)
    .await
    .expect("Failed to seed transaction");
}

pub async fn seed_split(
    db: &DatabaseConnection,
    guid: &str,
    tx_guid: &str,
    lot_guid: Option<&str>,
    action: &str,
    value: (i64, i64),
) {
    splits::ActiveModel {
        guid: Set(guid.to_string()),
        tx_guid: Set(tx_guid.to_string()),
        lot_guid: Set(lot_guid.map(str::to_string)),
        action: Set(action.to_string()),
        value_num: Set(value.0),
        value_denom: Set(value.1),
    }
    .insert(db)
    .await
    .expect("Failed to seed split");
}

pub async fn seed_slot(db: &DatabaseConnection, id: i64, name: &str, string_val: Option<&str>) {
    slots::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        string_val: Set(string_val.map(str::to_string)),
    }
    .insert(db)
    .await
    .expect("Failed to seed slot");
}

//! `SeaORM` Entity for the invoices table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guid: String,
    /// Human-readable invoice number (free-form string).
    pub id: String,
    /// Payment term reference.
    pub terms: Option<String>,
    pub notes: Option<String>,
    pub date_opened: Option<DateTime>,
    /// Posting timestamp, stored as naive UTC; NULL until posted.
    pub date_posted: Option<DateTime>,
    /// Owner reference; a customer or a job per `owner_type`.
    pub owner_guid: String,
    pub owner_type: i32,
    /// Ledger lot created at posting; NULL until posted.
    pub post_lot: Option<String>,
}

impl Model {
    /// Returns true if the invoice has been posted to the ledger.
    #[must_use]
    pub const fn is_posted(&self) -> bool {
        self.date_posted.is_some()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` Entity for the entries table (invoice line items).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guid: String,
    /// Parent invoice reference; NULL for bill lines, which this
    /// application never lists.
    pub invoice: Option<String>,
    pub description: String,
    pub action: Option<String>,
    pub quantity_num: i64,
    pub quantity_denom: i64,
    pub i_price_num: i64,
    pub i_price_denom: i64,
    /// Stored discount; not part of the derivation rules.
    pub i_discount_num: i64,
    pub i_discount_denom: i64,
    pub i_taxtable: Option<String>,
    pub i_taxable: i32,
    /// Stored flag; not part of the derivation rules.
    pub i_taxincluded: i32,
}

impl Model {
    /// Returns true if the line is flagged taxable.
    #[must_use]
    pub const fn taxable(&self) -> bool {
        self.i_taxable != 0
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

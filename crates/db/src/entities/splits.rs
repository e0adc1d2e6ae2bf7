//! `SeaORM` Entity for the splits table (ledger postings).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "splits")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guid: String,
    pub tx_guid: String,
    /// Lot grouping key linking the split to a posted invoice.
    pub lot_guid: Option<String>,
    pub action: String,
    /// Exact value; positive is a charge, non-positive a payment.
    pub value_num: i64,
    pub value_denom: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

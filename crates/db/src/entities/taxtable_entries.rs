//! `SeaORM` Entity for the taxtable_entries table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "taxtable_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Tax table this rate belongs to.
    pub taxtable: String,
    /// Rate percentage as an exact rational.
    pub amount_num: i64,
    pub amount_denom: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

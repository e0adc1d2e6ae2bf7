//! `SeaORM` Entity for the customers table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guid: String,
    pub name: String,
    pub addr_name: Option<String>,
    pub addr_addr1: Option<String>,
    pub addr_addr2: Option<String>,
    pub addr_addr3: Option<String>,
    pub addr_addr4: Option<String>,
}

impl Model {
    /// Returns the postal address as its four stored lines.
    #[must_use]
    pub fn address_lines(&self) -> [Option<&str>; 4] {
        [
            self.addr_addr1.as_deref(),
            self.addr_addr2.as_deref(),
            self.addr_addr3.as_deref(),
            self.addr_addr4.as_deref(),
        ]
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

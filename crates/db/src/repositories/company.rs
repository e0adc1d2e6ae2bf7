//! Company repository reading the business profile from the slots table.
//!
//! The accounting system keeps the book's own business details as
//! key/value slots under `options/Business/*`. One historical quirk is
//! preserved: the fax slot is repurposed to hold the bank account
//! number, since the books never record an actual fax number.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use fakt_shared::error::AppError;

use crate::entities::slots;

const SLOT_COMPANY_ID: &str = "options/Business/Company ID";
const SLOT_NAME: &str = "options/Business/Company Name";
const SLOT_ADDRESS: &str = "options/Business/Company Address";
const SLOT_EMAIL: &str = "options/Business/Company Email Address";
const SLOT_URL: &str = "options/Business/Company Website URL";
const SLOT_PHONE: &str = "options/Business/Company Phone Number";
// Repurposed: holds the bank account number.
const SLOT_FAX: &str = "options/Business/Company Fax Number";

/// Error types for company-profile operations.
#[derive(Debug, thiserror::Error)]
pub enum CompanyError {
    /// A required profile slot is missing from the store.
    #[error("Company profile slot not found: {0}")]
    SlotNotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<CompanyError> for AppError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::SlotNotFound(_) => Self::NotFound(err.to_string()),
            CompanyError::Database(db_err) => Self::Database(db_err.to_string()),
        }
    }
}

/// The book's own business details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyProfile {
    /// Registered company identifier.
    pub id: String,
    /// Company name.
    pub name: String,
    /// Postal address, newline separated as stored.
    pub address: String,
    /// Contact email address.
    pub email: String,
    /// Website URL.
    pub url: String,
    /// Phone number.
    pub phone: String,
    /// Bank account number (stored in the fax slot).
    pub bank_account_number: String,
}

/// Company repository over the slots table.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    db: DatabaseConnection,
}

impl CompanyRepository {
    /// Creates a new company repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the complete company profile.
    ///
    /// # Errors
    ///
    /// Returns `CompanyError::SlotNotFound` when a profile slot is
    /// absent or holds no string value.
    pub async fn profile(&self) -> Result<CompanyProfile, CompanyError> {
        Ok(CompanyProfile {
            id: self.slot(SLOT_COMPANY_ID).await?,
            name: self.slot(SLOT_NAME).await?,
            address: self.slot(SLOT_ADDRESS).await?,
            email: self.slot(SLOT_EMAIL).await?,
            url: self.slot(SLOT_URL).await?,
            phone: self.slot(SLOT_PHONE).await?,
            bank_account_number: self.slot(SLOT_FAX).await?,
        })
    }

    /// Reads one string slot by name.
    async fn slot(&self, name: &str) -> Result<String, CompanyError> {
        let row = slots::Entity::find()
            .filter(slots::Column::Name.eq(name))
            .one(&self.db)
            .await?
            .ok_or_else(|| CompanyError::SlotNotFound(name.to_string()))?;
        row.string_val
            .ok_or_else(|| CompanyError::SlotNotFound(name.to_string()))
    }
}

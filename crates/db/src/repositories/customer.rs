//! Customer repository for customer lookups and their invoice history.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use fakt_core::invoice::sort_by_number_desc;
use fakt_core::owner::OwnerType;
use fakt_shared::error::AppError;
use fakt_shared::types::Guid;

use crate::entities::{customers, invoices, jobs};

/// Error types for customer operations.
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    /// Customer not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<CustomerError> for AppError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(_) => Self::NotFound(err.to_string()),
            CustomerError::Database(db_err) => Self::Database(db_err.to_string()),
        }
    }
}

/// Customer repository over the bookkeeping store.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    db: DatabaseConnection,
}

impl CustomerRepository {
    /// Creates a new customer repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a customer by guid.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` if no row matches.
    pub async fn find(&self, guid: &Guid) -> Result<customers::Model, CustomerError> {
        customers::Entity::find_by_id(guid.as_str())
            .one(&self.db)
            .await?
            .ok_or_else(|| CustomerError::NotFound(guid.to_string()))
    }

    /// Lists all customers by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> Result<Vec<customers::Model>, CustomerError> {
        let rows = customers::Entity::find()
            .order_by_asc(customers::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Lists the jobs directly owned by a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn jobs(&self, guid: &Guid) -> Result<Vec<jobs::Model>, CustomerError> {
        let rows = jobs::Entity::find()
            .filter(jobs::Column::OwnerType.eq(OwnerType::Customer.code()))
            .filter(jobs::Column::OwnerGuid.eq(guid.as_str()))
            .order_by_asc(jobs::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Lists a customer's invoices, newest number first.
    ///
    /// Covers invoices billed to the customer directly and those
    /// billed through one of the customer's jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn invoices(&self, guid: &Guid) -> Result<Vec<invoices::Model>, CustomerError> {
        let job_guids: Vec<String> = self
            .jobs(guid)
            .await?
            .into_iter()
            .map(|job| job.guid)
            .collect();

        let direct = invoices::Entity::find()
            .filter(invoices::Column::OwnerType.eq(OwnerType::Customer.code()))
            .filter(invoices::Column::OwnerGuid.eq(guid.as_str()));
        let mut rows = direct.all(&self.db).await?;

        if !job_guids.is_empty() {
            let via_jobs = invoices::Entity::find()
                .filter(invoices::Column::OwnerType.eq(OwnerType::Job.code()))
                .filter(invoices::Column::OwnerGuid.is_in(job_guids))
                .all(&self.db)
                .await?;
            rows.extend(via_jobs);
        }

        sort_by_number_desc(&mut rows, |row: &invoices::Model| row.id.as_str());
        Ok(rows)
    }
}

//! Option repository for the application's own settings table.
//!
//! The one table this application owns and writes. Values are keyed by
//! (key, lang) so presentation text can vary per language.

use std::collections::BTreeMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use fakt_shared::error::AppError;

use crate::entities::options;

/// Error types for option operations.
#[derive(Debug, thiserror::Error)]
pub enum OptionError {
    /// Option not found.
    #[error("Option not found: {0} ({1})")]
    NotFound(String, String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<OptionError> for AppError {
    fn from(err: OptionError) -> Self {
        match err {
            OptionError::NotFound(_, _) => Self::NotFound(err.to_string()),
            OptionError::Database(db_err) => Self::Database(db_err.to_string()),
        }
    }
}

/// Option repository with read and upsert access.
#[derive(Debug, Clone)]
pub struct OptionRepository {
    db: DatabaseConnection,
}

impl OptionRepository {
    /// Creates a new option repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads one option value.
    ///
    /// # Errors
    ///
    /// Returns `OptionError::NotFound` if no row matches the key and
    /// language.
    pub async fn get(&self, key: &str, lang: &str) -> Result<Option<String>, OptionError> {
        let row = self
            .find(key, lang)
            .await?
            .ok_or_else(|| OptionError::NotFound(key.to_string(), lang.to_string()))?;
        Ok(row.value)
    }

    /// Writes one option value, inserting or updating as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn set(&self, key: &str, lang: &str, value: Option<String>) -> Result<(), OptionError> {
        match self.find(key, lang).await? {
            Some(existing) => {
                let mut row: options::ActiveModel = existing.into();
                row.value = Set(value);
                row.update(&self.db).await?;
            }
            None => {
                let row = options::ActiveModel {
                    key: Set(key.to_string()),
                    lang: Set(lang.to_string()),
                    value: Set(value),
                    ..Default::default()
                };
                row.insert(&self.db).await?;
            }
        }
        Ok(())
    }

    /// Lists all options for a language, keyed by option key.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self, lang: &str) -> Result<BTreeMap<String, Option<String>>, OptionError> {
        let rows = options::Entity::find()
            .filter(options::Column::Lang.eq(lang))
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|row| (row.key, row.value)).collect())
    }

    async fn find(&self, key: &str, lang: &str) -> Result<Option<options::Model>, OptionError> {
        let row = options::Entity::find()
            .filter(options::Column::Key.eq(key))
            .filter(options::Column::Lang.eq(lang))
            .one(&self.db)
            .await?;
        Ok(row)
    }
}

//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An owner-type discriminator outside the supported set.
    #[error("Invalid owner type: {0}")]
    InvalidOwnerType(i32),

    /// Taxable entry with no matching tax-table row.
    #[error("Missing tax rate: {0}")]
    MissingTaxRate(String),

    /// An operation that needs a posted invoice got an unposted one.
    #[error("Invoice not posted: {0}")]
    NotPosted(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database error (the store is unavailable or a query failed).
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::InvalidOwnerType(_) | Self::MissingTaxRate(_) | Self::NotPosted(_) => 422,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidOwnerType(_) => "INVALID_OWNER_TYPE",
            Self::MissingTaxRate(_) => "MISSING_TAX_RATE",
            Self::NotPosted(_) => "NOT_POSTED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::InvalidOwnerType(7).status_code(), 422);
        assert_eq!(AppError::MissingTaxRate(String::new()).status_code(), 422);
        assert_eq!(AppError::NotPosted(String::new()).status_code(), 422);
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::Database(String::new()).status_code(), 500);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(AppError::InvalidOwnerType(7).error_code(), "INVALID_OWNER_TYPE");
        assert_eq!(
            AppError::MissingTaxRate(String::new()).error_code(),
            "MISSING_TAX_RATE"
        );
        assert_eq!(AppError::NotPosted(String::new()).error_code(), "NOT_POSTED");
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::Database(String::new()).error_code(),
            "DATABASE_ERROR"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::NotFound("invoice abc".into()).to_string(),
            "Not found: invoice abc"
        );
        assert_eq!(
            AppError::InvalidOwnerType(5).to_string(),
            "Invalid owner type: 5"
        );
        assert_eq!(
            AppError::MissingTaxRate("t1".into()).to_string(),
            "Missing tax rate: t1"
        );
    }
}

//! Error types for the CowTracker service.

use exchange_rates::ConversionError;

use crate::domain::CowId;

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Cow not found: {0}")]
    CowNotFound(CowId),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Entity not found")]
    NotFound,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("{0}")]
    RateUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable identifier used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BadRequest",
            AppError::NotFound(_) => "NotFound",
            AppError::UnsupportedCurrency(_) => "UnsupportedCurrency",
            AppError::RateUnavailable(_) => "RateUnavailable",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(DomainError::ValidationError(msg)) => AppError::BadRequest(msg),
            RepoError::Domain(DomainError::CowNotFound(id)) => {
                AppError::NotFound(format!("Cow not found: {}", id))
            }
            RepoError::NotFound => AppError::NotFound("Resource not found".into()),
            RepoError::Storage(e) => AppError::Internal(e),
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::UnsupportedCurrency(code) => AppError::UnsupportedCurrency(code),
            e @ ConversionError::RateUnavailable { .. } => AppError::RateUnavailable(e.to_string()),
            e @ ConversionError::AmountOutOfRange { .. } => AppError::BadRequest(e.to_string()),
        }
    }
}

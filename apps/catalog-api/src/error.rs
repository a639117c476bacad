//! Error types for the catalog servers.
//!
//! ## Status Mapping
//! ```text
//! DbError::InvalidFilter                     → InvalidArgument
//! DbError::SeedFailed                        → FailedPrecondition
//! DbError::ConnectionFailed / PoolExhausted  → Unavailable
//! DbError::QueryFailed / DecodeFailed / ...  → Internal
//! ```

use tonic::Status;
use trackside_db::DbError;

/// Catalog service errors.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Catalog not initialized: {0}")]
    NotInitialized(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DbError> for ServiceError {
    fn from(error: DbError) -> Self {
        match error {
            DbError::InvalidFilter(e) => ServiceError::InvalidRequest(e.to_string()),
            DbError::SeedFailed(msg) => ServiceError::NotInitialized(msg),
            DbError::ConnectionFailed(_) | DbError::PoolExhausted => {
                ServiceError::Unavailable(error.to_string())
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<ServiceError> for Status {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::InvalidRequest(msg) => Status::invalid_argument(msg),
            ServiceError::NotInitialized(msg) => Status::failed_precondition(msg),
            ServiceError::Unavailable(msg) => Status::unavailable(msg),
            ServiceError::Internal(msg) => Status::internal(msg),
        }
    }
}

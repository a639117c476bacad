//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)        CoreError (rejected filter)         │
//! │       │                                 │                               │
//! │       ▼                                 ▼                               │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ServiceError (catalog-api) ← Mapped onto a gRPC status code           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (gateway) ← JSON body with an HTTP status                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use trackside_core::CoreError;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The list filter was rejected before any SQL ran.
    #[error(transparent)]
    InvalidFilter(#[from] CoreError),

    /// Creating the schema or inserting seed rows failed.
    ///
    /// ## When This Occurs
    /// - The first `init` call failed; every later call reports the same message
    /// - The database file is read-only or the disk is full
    #[error("Seed failed: {0}")]
    SeedFailed(String),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Pool has been closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed.
    ///
    /// ## When This Occurs
    /// - Runtime SQL error
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A stored column could not be decoded into its record field.
    #[error("Row decode failed: {0}")]
    DecodeFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Returns true if the caller's filter caused the failure.
    pub fn is_invalid_filter(&self) -> bool {
        matches!(self, DbError::InvalidFilter(_))
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::ColumnDecode   → DbError::DecodeFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_) => DbError::DecodeFailed(err.to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use trackside_core::ValidationError;

    #[test]
    fn test_pool_errors_are_categorized() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_invalid_filter_keeps_core_message() {
        let core = CoreError::InvalidFilter(ValidationError::NotAllowed {
            field: "sort_by".to_string(),
            value: "colour".to_string(),
            allowed: vec!["id".to_string()],
        });
        let err = DbError::from(core.clone());

        assert!(err.is_invalid_filter());
        assert_eq!(err.to_string(), core.to_string());
    }
}

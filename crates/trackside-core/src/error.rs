//! # Error Types
//!
//! Domain-specific error types for trackside-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  trackside-core errors (this file)                                     │
//! │  ├── CoreError        - Filter rejected before any SQL is built        │
//! │  └── ValidationError  - Field-level validation failures                │
//! │                                                                         │
//! │  trackside-db errors (separate crate)                                  │
//! │  └── DbError          - Storage and seed failures                      │
//! │                                                                         │
//! │  catalog-api errors (in app)                                           │
//! │  └── ServiceError     - Mapped onto tonic::Status                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → Status → HTTP           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The list filter cannot be turned into a query.
    ///
    /// ## When This Occurs
    /// - `sort_by` names a column outside the sortable allow-list
    ///
    /// The request is rejected instead of silently falling back to the
    /// default sort column.
    #[error("Invalid filter: {0}")]
    InvalidFilter(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value is not in allowed set.
    #[error("{field} '{value}' must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Gateway Error Types
//!
//! Errors returned to HTTP callers as a JSON body with a matching status.
//!
//! ## Status Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  source                          code                  HTTP            │
//! │  ──────────────────────────────  ────────────────────  ─────           │
//! │  malformed JSON body             VALIDATION_ERROR      400             │
//! │  gRPC InvalidArgument            VALIDATION_ERROR      400             │
//! │  gRPC NotFound                   NOT_FOUND             404             │
//! │  gRPC FailedPrecondition         NOT_READY             503             │
//! │  gRPC Unavailable                UNAVAILABLE           503             │
//! │  gRPC DeadlineExceeded           TIMEOUT               504             │
//! │  anything else                   INTERNAL              500             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Response
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "Invalid filter: sort_by 'colour' must be one of: [...]"
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tonic::Code;

/// API error returned to HTTP callers.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body or filter rejected (400)
    ValidationError,

    /// Resource not found (404)
    NotFound,

    /// Catalog has not been initialized (503)
    NotReady,

    /// Backend unreachable (503)
    Unavailable,

    /// Backend did not answer in time (504)
    Timeout,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::NotReady | ErrorCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<tonic::Status> for ApiError {
    fn from(status: tonic::Status) -> Self {
        let code = match status.code() {
            Code::InvalidArgument | Code::OutOfRange => ErrorCode::ValidationError,
            Code::NotFound => ErrorCode::NotFound,
            Code::FailedPrecondition => ErrorCode::NotReady,
            Code::Unavailable => ErrorCode::Unavailable,
            Code::DeadlineExceeded => ErrorCode::Timeout,
            _ => ErrorCode::Internal,
        };

        if code == ErrorCode::Internal {
            // Log the backend's detail but return a generic message
            tracing::error!(code = ?status.code(), message = %status.message(), "Backend call failed");
            return ApiError::new(code, "Catalog operation failed");
        }

        ApiError::new(code, status.message())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("Invalid request body: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grpc_codes_map_to_http() {
        let http = |status: tonic::Status| ApiError::from(status).code.status();

        assert_eq!(http(tonic::Status::invalid_argument("bad")), StatusCode::BAD_REQUEST);
        assert_eq!(http(tonic::Status::unavailable("down")), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(http(tonic::Status::failed_precondition("seed")), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(http(tonic::Status::deadline_exceeded("slow")), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(http(tonic::Status::internal("boom")), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = ApiError::from(tonic::Status::internal("no such table: races"));
        assert_eq!(err.code, ErrorCode::Internal);
        assert!(!err.message.contains("races"));
    }

    #[test]
    fn test_serializes_screaming_code() {
        let err = ApiError::validation("sort_by 'x' must be one of: [\"id\"]");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "sort_by 'x' must be one of: [\"id\"]");
    }
}

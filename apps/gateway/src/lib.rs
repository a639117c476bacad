//! # Trackside Gateway
//!
//! HTTP/JSON front door for the racing and sports catalog servers.
//!
//! ```text
//! ┌────────────┐  POST /v1/list-races   ┌──────────────┐  gRPC  ┌──────────────┐
//! │ HTTP client│ ─────────────────────► │   gateway    │ ─────► │ racing :9000 │
//! │            │  POST /v1/list-events  │  (axum)      │ ─────► │ sports :9999 │
//! └────────────┘                        └──────────────┘        └──────────────┘
//! ```
//!
//! The gateway holds no data; every request is a single backend call.

pub mod config;
pub mod dto;
pub mod error;
pub mod proto;
pub mod routes;
pub mod telemetry;

pub use config::{ConfigError, GatewayConfig};
pub use error::{ApiError, ErrorCode};
pub use routes::{router, GatewayState};

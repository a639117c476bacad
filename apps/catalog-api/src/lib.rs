//! # Trackside Catalog API
//!
//! gRPC servers for the racing and sports catalogs.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog API Services                            │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │  RacingService           │        │  SportsService           │      │
//! │  │  racing.Racing           │        │  sports.Events           │      │
//! │  │  • ListRaces             │        │  • ListEvents            │      │
//! │  └────────────┬─────────────┘        └────────────┬─────────────┘      │
//! │               │ CatalogRepository<Race>           │ <Event>            │
//! │  ┌────────────▼─────────────┐        ┌────────────▼─────────────┐      │
//! │  │  RaceRepository          │        │  EventRepository         │      │
//! │  │  ./db/racing.db          │        │  ./db/events.db          │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables (see [`config`]):
//! - `RACING_GRPC_ADDR` / `SPORTS_GRPC_ADDR` - listen address
//! - `RACING_DB_PATH` / `SPORTS_DB_PATH` - SQLite file
//! - `RACING_DB_MAX_CONNECTIONS` / `SPORTS_DB_MAX_CONNECTIONS` - pool size
//! - `RACING_DB_TIMEOUT_SECS` / `SPORTS_DB_TIMEOUT_SECS` - pool acquire timeout
//! - `RUST_LOG` - log filter (default `info`)

pub mod config;
pub mod error;
pub mod proto;
pub mod server;
pub mod services;
pub mod telemetry;

// Re-exports
pub use config::{Catalog, CatalogConfig, ConfigError};
pub use error::ServiceError;
pub use services::{racing_service::RacingService, sports_service::SportsService};

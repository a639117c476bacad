//! # trackside-core: Pure Domain Logic for Trackside
//!
//! Records, list filters and the list query builder shared by the racing
//! and sports catalogs. Nothing in here touches a database or the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Trackside Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           HTTP/JSON gateway  ──►  racing / sports gRPC          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ListFilter                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ trackside-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  filter   │  │   query   │  │   error   │  │   │
//! │  │   │ Race      │  │ ListFilter│  │ build_    │  │ CoreError │  │   │
//! │  │   │ Event     │  │ SortField │  │ list_query│  │           │  │   │
//! │  │   │ Status    │  │ SortOrder │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ QueryFragment                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                trackside-db (Database Layer)                    │   │
//! │  │        SQLite execution, row materialization, seeding           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Race, Event and their derived [`Status`]
//! - [`filter`] - [`ListFilter`] and the sort allow-list
//! - [`query`] - [`build_list_query`] producing a [`QueryFragment`]
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod query;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{ListFilter, SortField, SortOrder};
pub use query::{build_list_query, QueryFragment, SqlArg};
pub use types::{CatalogRecord, Event, Race, RecordFields, Status};

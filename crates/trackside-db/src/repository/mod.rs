//! # Repository Module
//!
//! Read-only catalog repositories for Trackside.
//!
//! ## Repository Facade
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Repository Lifecycle                         │
//! │                                                                         │
//! │  server startup                                                        │
//! │       │  Repo::open(pool)       ← creates the empty table if missing   │
//! │       │  repo.init()            ← guarded, runs the seed body once     │
//! │       ▼                                                                 │
//! │  RaceRepository / EventRepository                                      │
//! │  ├── init(&self)                                                       │
//! │  └── list(&self, filter)                                               │
//! │       │                                                                 │
//! │       │  build_list_query (trackside-core)                             │
//! │       ▼                                                                 │
//! │  listing::fetch_records  ← execute + materialize with derived status   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  list() never caches: every call re-queries storage.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`RaceRepository`] - The racing catalog (`races` table)
//! - [`EventRepository`] - The sports catalog (`events` table)
//!
//! Services depend on [`CatalogRepository`] rather than the concrete types,
//! so they can be exercised against stub repositories.

use async_trait::async_trait;

use trackside_core::{CatalogRecord, ListFilter};

use crate::error::DbResult;

pub mod event;
pub mod listing;
pub mod race;

pub use event::EventRepository;
pub use race::RaceRepository;

/// A read-only catalog of records of type `R`.
#[async_trait]
pub trait CatalogRepository<R: CatalogRecord>: Send + Sync {
    /// Prepares storage. Runs the seed body at most once per instance; a
    /// failure is reported again on every later call.
    async fn init(&self) -> DbResult<()>;

    /// Lists records matching `filter` (`None` = all, in storage order).
    async fn list(&self, filter: Option<&ListFilter>) -> DbResult<Vec<R>>;
}

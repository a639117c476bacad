//! # trackside-db: Database Layer for Trackside
//!
//! SQLite storage for the racing and sports catalogs, using sqlx for
//! async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Trackside Data Flow                              │
//! │                                                                         │
//! │  gRPC ListRaces / ListEvents                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   trackside-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │     Seed     │  │   │
//! │  │   │   (pool.rs)   │    │ (race, event) │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ RaceRepo      │───►│ SeedGuard    │  │   │
//! │  │   │ Health check  │    │ EventRepo     │    │ races/events │  │   │
//! │  │   │               │    │ listing.rs    │    │ dummy rows   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        SQLite Database (./db/racing.db, ./db/events.db)         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`seed`] - Table creation, dummy data and the once-only seed guard
//! - [`error`] - Database error types
//! - [`repository`] - Race and event repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trackside_db::{Database, DbConfig, RaceRepository};
//!
//! let db = Database::new(DbConfig::new("./db/racing.db")).await?;
//! let races = RaceRepository::open(db.pool().clone()).await?;
//! races.init().await?;
//!
//! let all = races.list(None).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use seed::{SeedGuard, SeedState};

// Repository re-exports for convenience
pub use repository::{CatalogRepository, EventRepository, RaceRepository};

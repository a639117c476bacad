//! # Event Repository
//!
//! The sports catalog: seeds the `events` table once and lists events.
//! Same lifecycle and query rules as [`super::RaceRepository`].

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use trackside_core::{build_list_query, Event, ListFilter};

use super::listing::fetch_records;
use super::CatalogRepository;
use crate::error::DbResult;
use crate::seed::{create_table, seed_catalog, SeedGuard, SeedState, EVENTS};

/// Base list query. Column order is fixed by [`super::listing`].
const EVENTS_LIST: &str =
    "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM events";

/// Repository for the sports catalog.
#[derive(Debug)]
pub struct EventRepository {
    pool: SqlitePool,
    seed: SeedGuard,
}

impl EventRepository {
    /// Opens the repository, creating an empty `events` table if missing.
    ///
    /// The repository starts uninitialized: `list` works and returns
    /// whatever the table holds (nothing on a fresh database) until `init`
    /// seeds it.
    pub async fn open(pool: SqlitePool) -> DbResult<Self> {
        create_table(&pool, &EVENTS).await?;
        Ok(EventRepository {
            pool,
            seed: SeedGuard::new(),
        })
    }

    /// Creates the `events` table and dummy data, once.
    pub async fn init(&self) -> DbResult<()> {
        let pool = self.pool.clone();
        self.seed
            .run(|| async move { seed_catalog(&pool, &EVENTS).await })
            .await
    }

    /// Lists events matching `filter`.
    pub async fn list(&self, filter: Option<&ListFilter>) -> DbResult<Vec<Event>> {
        let fragment = build_list_query(EVENTS_LIST, filter)?;
        debug!(filtered = filter.is_some(), "Listing events");
        fetch_records(&self.pool, &fragment).await
    }

    /// State of the one-time seed step.
    pub fn seed_state(&self) -> SeedState {
        self.seed.state()
    }
}

#[async_trait]
impl CatalogRepository<Event> for EventRepository {
    async fn init(&self) -> DbResult<()> {
        EventRepository::init(self).await
    }

    async fn list(&self, filter: Option<&ListFilter>) -> DbResult<Vec<Event>> {
        EventRepository::list(self, filter).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

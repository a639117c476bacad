//! # Race Repository
//!
//! The racing catalog: seeds the `races` table once and lists races
//! through the shared filter/query/materialize path.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use trackside_core::{build_list_query, ListFilter, Race};

use super::listing::fetch_records;
use super::CatalogRepository;
use crate::error::DbResult;
use crate::seed::{create_table, seed_catalog, SeedGuard, SeedState, RACES};

/// Base list query. Column order is fixed by [`super::listing`].
const RACES_LIST: &str =
    "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races";

/// Repository for the racing catalog.
///
/// Build one per server and share it: the seed guard lives on the instance.
///
/// ## Usage
/// ```rust,ignore
/// let races = RaceRepository::open(db.pool().clone()).await?;
/// races.init().await?;
///
/// let filter = ListFilter { meeting_ids: vec![5], ..ListFilter::default() };
/// let listed = races.list(Some(&filter)).await?;
/// ```
#[derive(Debug)]
pub struct RaceRepository {
    pool: SqlitePool,
    seed: SeedGuard,
}

impl RaceRepository {
    /// Opens the repository, creating an empty `races` table if missing.
    ///
    /// The repository starts uninitialized: `list` works and returns
    /// whatever the table holds (nothing on a fresh database) until `init`
    /// seeds it.
    pub async fn open(pool: SqlitePool) -> DbResult<Self> {
        create_table(&pool, &RACES).await?;
        Ok(RaceRepository {
            pool,
            seed: SeedGuard::new(),
        })
    }

    /// Creates the `races` table and dummy data, once.
    pub async fn init(&self) -> DbResult<()> {
        let pool = self.pool.clone();
        self.seed
            .run(|| async move { seed_catalog(&pool, &RACES).await })
            .await
    }

    /// Lists races matching `filter`.
    ///
    /// ## Errors
    /// * `DbError::InvalidFilter` - `sort_by` is not a sortable column
    /// * `DbError::QueryFailed` - Storage rejected the query
    /// * `DbError::DecodeFailed` - A stored row could not be decoded
    pub async fn list(&self, filter: Option<&ListFilter>) -> DbResult<Vec<Race>> {
        let fragment = build_list_query(RACES_LIST, filter)?;
        debug!(filtered = filter.is_some(), "Listing races");
        fetch_records(&self.pool, &fragment).await
    }

    /// State of the one-time seed step.
    pub fn seed_state(&self) -> SeedState {
        self.seed.state()
    }
}

#[async_trait]
impl CatalogRepository<Race> for RaceRepository {
    async fn init(&self) -> DbResult<()> {
        RaceRepository::init(self).await
    }

    async fn list(&self, filter: Option<&ListFilter>) -> DbResult<Vec<Race>> {
        RaceRepository::list(self, filter).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use crate::seed::{insert_rows, SeedRow, SEED_ROW_COUNT};
    use chrono::{Duration, Utc};
    use std::sync::Arc;
    use trackside_core::Status;

    async fn setup() -> (Database, RaceRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = RaceRepository::open(db.pool().clone()).await.unwrap();
        (db, repo)
    }

    fn row(id: i64, meeting_id: i64, number: i64, visible: bool, offset: Duration) -> SeedRow {
        SeedRow {
            id,
            meeting_id,
            name: format!("Race {id}"),
            number,
            visible,
            advertised_start_time: Utc::now() + offset,
        }
    }

    /// Fixed rows instead of the generated seed, for exact assertions.
    async fn setup_with_rows(rows: &[SeedRow]) -> (Database, RaceRepository) {
        let (db, repo) = setup().await;
        insert_rows(db.pool(), &RACES, rows).await.unwrap();
        (db, repo)
    }

    #[tokio::test]
    async fn test_init_seeds_races() {
        let (_db, repo) = setup().await;
        assert_eq!(repo.seed_state(), SeedState::Uninitialized);

        repo.init().await.unwrap();
        assert_eq!(repo.seed_state(), SeedState::Initialized);

        let races = repo.list(None).await.unwrap();
        assert_eq!(races.len() as i64, SEED_ROW_COUNT);
        assert!(races.iter().any(|r| r.status == Status::Open));
        assert!(races.iter().any(|r| r.status == Status::Closed));
    }

    #[tokio::test]
    async fn test_concurrent_init_seeds_once() {
        let (db, repo) = setup().await;
        let repo = Arc::new(repo);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move { repo.init().await }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM races")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, SEED_ROW_COUNT);
    }

    #[tokio::test]
    async fn test_init_failure_is_sticky() {
        let (db, repo) = setup().await;
        db.close().await;

        let first = repo.init().await;
        assert!(matches!(first, Err(DbError::SeedFailed(_))));
        assert!(matches!(repo.seed_state(), SeedState::Failed(_)));

        let second = repo.init().await;
        assert_eq!(
            first.map_err(|e| e.to_string()),
            second.map_err(|e| e.to_string())
        );
    }

    #[tokio::test]
    async fn test_list_before_init_is_empty() {
        let (_db, repo) = setup().await;
        assert_eq!(repo.seed_state(), SeedState::Uninitialized);

        assert!(repo.list(None).await.unwrap().is_empty());

        let filter = ListFilter {
            meeting_ids: vec![1],
            visible_only: true,
            ..ListFilter::default()
        };
        assert!(repo.list(Some(&filter)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_by_meeting_and_visibility() {
        let (_db, repo) = setup_with_rows(&[
            row(1, 1, 1, true, Duration::hours(1)),
            row(2, 2, 2, false, Duration::hours(2)),
            row(3, 2, 3, true, Duration::hours(3)),
            row(4, 3, 4, true, Duration::hours(4)),
        ])
        .await;

        let filter = ListFilter {
            meeting_ids: vec![2, 3],
            visible_only: true,
            ..ListFilter::default()
        };
        let races = repo.list(Some(&filter)).await.unwrap();

        // Default order: latest advertised start first.
        let ids: Vec<i64> = races.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3]);
    }

    #[tokio::test]
    async fn test_list_orders_by_requested_field() {
        let (_db, repo) = setup_with_rows(&[
            row(1, 1, 7, true, Duration::hours(1)),
            row(2, 1, 3, true, Duration::hours(2)),
            row(3, 1, 5, true, Duration::hours(3)),
        ])
        .await;

        let filter = ListFilter {
            sort_by: "number".to_string(),
            order: "asc".to_string(),
            ..ListFilter::default()
        };
        let numbers: Vec<i64> = repo
            .list(Some(&filter))
            .await
            .unwrap()
            .iter()
            .map(|r| r.number)
            .collect();
        assert_eq!(numbers, vec![3, 5, 7]);
    }

    #[tokio::test]
    async fn test_status_reflects_start_time() {
        let (_db, repo) = setup_with_rows(&[
            row(1, 1, 1, true, -Duration::minutes(10)),
            row(2, 1, 2, true, Duration::minutes(10)),
        ])
        .await;

        let races = repo.list(Some(&ListFilter::default())).await.unwrap();
        let status = |id: i64| races.iter().find(|r| r.id == id).map(|r| r.status);

        assert_eq!(status(1), Some(Status::Closed));
        assert_eq!(status(2), Some(Status::Open));
    }

    #[tokio::test]
    async fn test_no_matches_is_empty() {
        let (_db, repo) = setup_with_rows(&[row(1, 1, 1, true, Duration::hours(1))]).await;

        let filter = ListFilter {
            meeting_ids: vec![99],
            ..ListFilter::default()
        };
        assert!(repo.list(Some(&filter)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_sees_rows_added_after_init() {
        let (db, repo) = setup().await;
        repo.init().await.unwrap();

        insert_rows(
            db.pool(),
            &RACES,
            &[row(SEED_ROW_COUNT + 1, 1, 1, true, Duration::hours(1))],
        )
        .await
        .unwrap();

        let races = repo.list(None).await.unwrap();
        assert_eq!(races.len() as i64, SEED_ROW_COUNT + 1);
    }

    #[tokio::test]
    async fn test_unknown_sort_field_is_rejected() {
        let (_db, repo) = setup().await;
        repo.init().await.unwrap();

        let filter = ListFilter {
            sort_by: "name; DROP TABLE races".to_string(),
            ..ListFilter::default()
        };
        let err = repo.list(Some(&filter)).await.unwrap_err();
        assert!(err.is_invalid_filter());

        // Table is untouched.
        assert_eq!(repo.list(None).await.unwrap().len() as i64, SEED_ROW_COUNT);
    }
}

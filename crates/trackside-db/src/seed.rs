//! # Schema and Seed Data
//!
//! One-time table creation and dummy rows for the racing and sports
//! catalogs, plus the guard that makes the seed step run at most once.
//!
//! ## Seed Guard Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SeedGuard States                                 │
//! │                                                                         │
//! │                     first init() call                                   │
//! │   Uninitialized ─────────────────────────┬──────────────────────┐      │
//! │        │                                 │                      │      │
//! │        │ concurrent init() calls         ▼ Ok                   ▼ Err  │
//! │        └── await the same task ──► Initialized            Failed(msg) │
//! │                                         │                      │      │
//! │                                         ▼                      ▼      │
//! │                              later init() → Ok      later init() →    │
//! │                              (no seed work)         SeedFailed(msg)   │
//! │                                                     (no retry)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Generated Rows
//! 100 rows per catalog, ids 1..=100. Every other column is derived from the
//! row index so two seeds of the same catalog produce the same shape:
//!
//! | Column                  | Range                                    |
//! |-------------------------|------------------------------------------|
//! | `meeting_id`            | 1..=10                                   |
//! | `number`                | 1..=12                                   |
//! | `visible`               | about two rows in three                  |
//! | `advertised_start_time` | one day before to two days after seeding |
//!
//! Rows are written with `INSERT OR IGNORE`, so re-seeding an existing file
//! keeps the rows already there.

use std::future::Future;
use std::sync::OnceLock;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use futures_util::future::{BoxFuture, FutureExt, Shared};
use sqlx::SqlitePool;
use tracing::{debug, error, info};

use crate::error::{DbError, DbResult};

/// Rows generated per catalog.
pub const SEED_ROW_COUNT: i64 = 100;

/// Seed window: start times fall in `[now - 1 day, now + 2 days)`.
const WINDOW_MINUTES: i64 = 3 * 24 * 60;
const WINDOW_LEAD_MINUTES: i64 = 24 * 60;

// =============================================================================
// Seed Guard
// =============================================================================

/// Observable state of a [`SeedGuard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedState {
    /// No `init` call has completed yet.
    Uninitialized,
    /// The seed body ran and succeeded.
    Initialized,
    /// The seed body ran and failed with this message.
    Failed(String),
}

/// In-flight or finished seed task, shared by every caller.
type SeedTask = Shared<BoxFuture<'static, Result<(), String>>>;

/// Runs a seed body at most once and remembers its outcome.
///
/// The body runs on its own tokio task. Callers only await it, so dropping
/// a caller (an aborted task, a cancelled request) never cancels the body
/// or lets a later caller start it again. Concurrent callers all observe
/// the same result. A failure is sticky: the body is never retried on the
/// same guard, and every later call reports the original message.
#[derive(Default)]
pub struct SeedGuard {
    task: OnceLock<SeedTask>,
}

impl SeedGuard {
    /// Creates a guard in the `Uninitialized` state.
    pub fn new() -> Self {
        SeedGuard::default()
    }

    /// Runs `seed` unless a previous call already started it, then waits
    /// for its outcome.
    ///
    /// ## Returns
    /// * `Ok(())` - The seed body succeeded (now or earlier)
    /// * `Err(DbError::SeedFailed)` - The seed body failed (now or earlier)
    pub async fn run<F, Fut>(&self, seed: F) -> DbResult<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = DbResult<()>> + Send + 'static,
    {
        let task = self
            .task
            .get_or_init(|| spawn_seed(seed()))
            .clone();

        task.await.map_err(DbError::SeedFailed)
    }

    /// Current state, without waiting on an in-flight seed.
    pub fn state(&self) -> SeedState {
        match self.task.get().and_then(|task| task.peek()) {
            None => SeedState::Uninitialized,
            Some(Ok(())) => SeedState::Initialized,
            Some(Err(message)) => SeedState::Failed(message.clone()),
        }
    }
}

impl std::fmt::Debug for SeedGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedGuard")
            .field("state", &self.state())
            .finish()
    }
}

/// Detaches `body` onto the runtime and wraps its handle in a shared future.
fn spawn_seed<Fut>(body: Fut) -> SeedTask
where
    Fut: Future<Output = DbResult<()>> + Send + 'static,
{
    let handle = tokio::spawn(body);

    async move {
        match handle.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                error!(error = %e, "Seed step failed");
                Err(e.to_string())
            }
            Err(e) => {
                error!(error = %e, "Seed task did not finish");
                Err(format!("seed task did not finish: {e}"))
            }
        }
    }
    .boxed()
    .shared()
}

// =============================================================================
// Catalog Tables
// =============================================================================

/// A catalog table and the names its seed rows draw from.
#[derive(Debug, Clone, Copy)]
pub struct CatalogTable {
    /// Table name. Never caller-supplied.
    pub name: &'static str,

    /// Pool of display names for seed rows.
    pub names: &'static [&'static str],
}

/// The racing catalog's `races` table.
pub const RACES: CatalogTable = CatalogTable {
    name: "races",
    names: &[
        "Flemington",
        "Randwick",
        "Caulfield",
        "Moonee Valley",
        "Rosehill",
        "Eagle Farm",
        "Morphettville",
        "Ascot",
        "Doomben",
        "Sandown",
        "Warwick Farm",
        "Cranbourne",
    ],
};

/// The sports catalog's `events` table.
pub const EVENTS: CatalogTable = CatalogTable {
    name: "events",
    names: &[
        "Tennis",
        "Fencing",
        "Badminton",
        "Archery",
        "Caber Toss",
        "Football",
        "Soccer",
        "Extreme Ironing",
        "Swimming",
        "Gymnastics",
        "Toe Wrestling",
        "Cricket",
    ],
};

/// One row to be inserted into a catalog table.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRow {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
}

// =============================================================================
// Generation
// =============================================================================

/// Generates the seed rows for `table` relative to `now`.
pub fn seed_rows(table: &CatalogTable, now: DateTime<Utc>) -> Vec<SeedRow> {
    (1..=SEED_ROW_COUNT)
        .map(|i| {
            let name_index = (i as usize * 5) % table.names.len().max(1);
            // 1297 is coprime with the window length, so offsets don't repeat
            let offset = (i * 1297) % WINDOW_MINUTES - WINDOW_LEAD_MINUTES;

            SeedRow {
                id: i,
                meeting_id: 1 + (i * 7) % 10,
                name: table
                    .names
                    .get(name_index)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("{} {}", table.name, i)),
                number: 1 + (i * 5) % 12,
                visible: i % 3 != 2,
                advertised_start_time: now + Duration::minutes(offset),
            }
        })
        .collect()
}

// =============================================================================
// Schema + Insert
// =============================================================================

/// Creates `table` and fills it with generated rows.
///
/// This is the body run behind each repository's [`SeedGuard`].
pub async fn seed_catalog(pool: &SqlitePool, table: &CatalogTable) -> DbResult<()> {
    info!(table = table.name, "Seeding catalog");

    create_table(pool, table).await?;
    let rows = seed_rows(table, Utc::now());
    let inserted = insert_rows(pool, table, &rows).await?;

    info!(
        table = table.name,
        generated = rows.len(),
        inserted,
        "Catalog seeded"
    );
    Ok(())
}

/// `CREATE TABLE IF NOT EXISTS` for a catalog table.
pub async fn create_table(pool: &SqlitePool, table: &CatalogTable) -> DbResult<()> {
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {} (id INTEGER PRIMARY KEY, meeting_id INTEGER, name TEXT, number INTEGER, visible INTEGER, advertised_start_time DATETIME)",
        table.name
    );
    sqlx::query(&sql).execute(pool).await?;
    Ok(())
}

/// Inserts `rows` in one transaction, skipping ids that already exist.
///
/// Start times are stored as RFC 3339 text in UTC.
///
/// ## Returns
/// Number of rows actually inserted.
pub async fn insert_rows(pool: &SqlitePool, table: &CatalogTable, rows: &[SeedRow]) -> DbResult<u64> {
    let sql = format!(
        "INSERT OR IGNORE INTO {} (id, meeting_id, name, number, visible, advertised_start_time) VALUES (?, ?, ?, ?, ?, ?)",
        table.name
    );

    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for row in rows {
        let result = sqlx::query(&sql)
            .bind(row.id)
            .bind(row.meeting_id)
            .bind(row.name.as_str())
            .bind(row.number)
            .bind(row.visible)
            .bind(
                row.advertised_start_time
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            )
            .execute(&mut *tx)
            .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;

    debug!(table = table.name, inserted, "Rows inserted");
    Ok(inserted)
}

// =============================================================================
// Unit Tests
// =============================================================================

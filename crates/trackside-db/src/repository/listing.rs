//! # Listing Execution
//!
//! Runs a built [`QueryFragment`] and turns the resulting rows into records.
//! Shared by the race and event repositories; only the record type differs.
//!
//! ## Row Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  index  column                 decoded as                               │
//! │  ─────  ─────────────────────  ──────────────────────────────────────   │
//! │    0    id                     i64                                      │
//! │    1    meeting_id             i64                                      │
//! │    2    name                   String                                   │
//! │    3    number                 i64                                      │
//! │    4    visible                bool (INTEGER 0/1)                       │
//! │    5    advertised_start_time  DateTime<Utc>                            │
//! │    -    status                 Status::at(start, now), never stored     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Base queries must select exactly these columns, in this order.

use chrono::{DateTime, Utc};
use futures_util::{Stream, TryStreamExt};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use trackside_core::{CatalogRecord, QueryFragment, RecordFields, SqlArg, Status};

use crate::error::DbResult;

/// Executes `fragment` and materializes every row as `R`.
///
/// Rows are decoded in the order storage returns them. An empty result is
/// an empty `Vec`, not an error. The first decode failure aborts the whole
/// call; no partial list is returned.
pub async fn fetch_records<R: CatalogRecord>(
    pool: &SqlitePool,
    fragment: &QueryFragment,
) -> DbResult<Vec<R>> {
    debug!(
        entity = R::ENTITY,
        sql = %fragment.sql(),
        args = fragment.args().len(),
        "Executing list query"
    );

    let mut query = sqlx::query(fragment.sql());
    for arg in fragment.args() {
        query = match *arg {
            SqlArg::Int(value) => query.bind(value),
            SqlArg::Bool(value) => query.bind(value),
        };
    }

    let records = materialize(query.fetch(pool), Utc::now()).await?;

    debug!(entity = R::ENTITY, count = records.len(), "List query returned");
    Ok(records)
}

/// Streams `rows` into records, deriving every status against the same `now`.
///
/// The first row error or decode failure aborts the call.
pub async fn materialize<R, S>(mut rows: S, now: DateTime<Utc>) -> DbResult<Vec<R>>
where
    R: CatalogRecord,
    S: Stream<Item = Result<SqliteRow, sqlx::Error>> + Unpin,
{
    let mut records = Vec::new();

    while let Some(row) = rows.try_next().await? {
        records.push(R::from_fields(decode_row(&row, now)?));
    }

    Ok(records)
}

/// Decodes one row and derives its status as seen at `now`.
pub fn decode_row(row: &SqliteRow, now: DateTime<Utc>) -> Result<RecordFields, sqlx::Error> {
    let advertised_start_time: DateTime<Utc> = row.try_get(5)?;

    Ok(RecordFields {
        id: row.try_get(0)?,
        meeting_id: row.try_get(1)?,
        name: row.try_get(2)?,
        number: row.try_get(3)?,
        visible: row.try_get(4)?,
        advertised_start_time,
        status: Status::at(advertised_start_time, now),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use trackside_core::Race;

    #[tokio::test]
    async fn test_decode_row_derives_status() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let row = sqlx::query(
            "SELECT 4 AS id, 2 AS meeting_id, 'Ascot' AS name, 9 AS number, 1 AS visible, '2021-03-02T01:00:00Z' AS advertised_start_time",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();

        let start: DateTime<Utc> = "2021-03-02T01:00:00Z".parse().unwrap();

        let before = decode_row(&row, start - chrono::Duration::seconds(1)).unwrap();
        assert_eq!(before.id, 4);
        assert_eq!(before.meeting_id, 2);
        assert_eq!(before.name, "Ascot");
        assert_eq!(before.number, 9);
        assert!(before.visible);
        assert_eq!(before.advertised_start_time, start);
        assert_eq!(before.status, Status::Open);

        let after = decode_row(&row, start + chrono::Duration::seconds(1)).unwrap();
        assert_eq!(after.status, Status::Closed);
    }

    #[tokio::test]
    async fn test_materialize_keeps_storage_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let rows = sqlx::query(
            "SELECT 3, 1, 'Ascot', 1, 0, '2021-03-02T03:00:00Z' UNION ALL SELECT 1, 1, 'Doomben', 2, 1, '2021-03-02T01:00:00Z' UNION ALL SELECT 2, 1, 'Sandown', 3, 1, '2021-03-02T02:00:00Z'",
        )
        .fetch(db.pool());
        let now: DateTime<Utc> = "2021-03-02T02:00:00Z".parse().unwrap();

        let races: Vec<Race> = materialize(rows, now).await.unwrap();

        let ids: Vec<i64> = races.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(races[0].status, Status::Open);
        assert_eq!(races[1].status, Status::Closed);
        // Equal to now is still open.
        assert_eq!(races[2].status, Status::Open);
        assert!(!races[0].visible);
    }

    #[tokio::test]
    async fn test_materialize_empty_result() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let rows = sqlx::query("SELECT 1, 1, 'x', 1, 1, '2021-03-02T01:00:00Z' WHERE 0").fetch(db.pool());

        let races: Vec<Race> = materialize(rows, Utc::now()).await.unwrap();
        assert!(races.is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_time_aborts_the_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let fragment = QueryFragment::new(
            "SELECT 1, 1, 'Ascot', 1, 1, 'not a time' UNION ALL SELECT 2, 1, 'Doomben', 2, 1, '2021-03-02T01:00:00Z'",
        );

        let result = fetch_records::<Race>(db.pool(), &fragment).await;
        assert!(matches!(result, Err(DbError::DecodeFailed(_))));
    }

    #[tokio::test]
    async fn test_missing_table_is_a_query_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let fragment = QueryFragment::new("SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races");

        let result = fetch_records::<Race>(db.pool(), &fragment).await;
        assert!(matches!(result, Err(DbError::QueryFailed(_))));
    }
}

//! Table Registry
//!
//! Single source of truth for table occupancy. Occupied tables older than the
//! staleness threshold are reclaimed inline on every read; there is no timer.

use shared::error::ErrorCode;
use shared::models::{DiningTable, TableStatus, TableStatusUpdate};
use sqlx::{SqliteConnection, SqlitePool};

use crate::core::{CoreError, CoreResult, Entity, check_version};
use crate::db;
use crate::db::repository::dining_table;

/// Create tables `1..=count` when the registry is empty.
///
/// Returns how many tables were inserted (0 when already seeded).
pub async fn seed_tables(pool: &SqlitePool, count: i64, now: i64) -> CoreResult<u64> {
    if dining_table::count(pool).await? > 0 {
        return Ok(0);
    }

    let mut tx = db::begin_immediate(pool).await?;
    let mut inserted = 0;
    for table_no in 1..=count {
        if dining_table::insert_if_missing(&mut *tx, table_no, now).await? {
            inserted += 1;
        }
    }
    tx.commit().await?;
    Ok(inserted)
}

/// All tables ordered by number, stale ones freed first.
pub async fn list_tables(pool: &SqlitePool, now: i64, stale_after: i64) -> CoreResult<Vec<DiningTable>> {
    let tables = dining_table::find_all(pool).await?;
    let mut result = Vec::with_capacity(tables.len());
    for table in tables {
        result.push(reclaim_if_stale(pool, table, now, stale_after).await?);
    }
    Ok(result)
}

/// One table, reclaimed the same way as [`list_tables`].
pub async fn get_table(
    pool: &SqlitePool,
    table_no: i64,
    now: i64,
    stale_after: i64,
) -> CoreResult<DiningTable> {
    let table = dining_table::find_by_no(pool, table_no)
        .await?
        .ok_or(CoreError::not_found(Entity::Table, table_no))?;
    reclaim_if_stale(pool, table, now, stale_after).await
}

async fn reclaim_if_stale(
    pool: &SqlitePool,
    table: DiningTable,
    now: i64,
    stale_after: i64,
) -> CoreResult<DiningTable> {
    if !table.is_stale(now, stale_after) {
        return Ok(table);
    }

    match dining_table::release_if_unchanged(pool, table.table_no, table.version, now).await? {
        Some(freed) => {
            tracing::info!(
                table_no = freed.table_no,
                occupied_at = table.occupied_at,
                "Reclaimed stale table"
            );
            Ok(freed)
        }
        // Someone wrote the row after we read it; their state wins
        None => dining_table::find_by_no(pool, table.table_no)
            .await?
            .ok_or(CoreError::not_found(Entity::Table, table.table_no)),
    }
}

/// Mark a table occupied as of `now`. Re-occupying restarts the timer.
pub async fn occupy(
    pool: &SqlitePool,
    table_no: i64,
    now: i64,
    expected_version: Option<i64>,
) -> CoreResult<DiningTable> {
    let mut tx = db::begin_immediate(pool).await?;
    let current = load(&mut tx, table_no).await?;
    check_version(expected_version, current.version)?;
    let table = occupy_in(&mut tx, table_no, now).await?;
    tx.commit().await?;
    Ok(table)
}

/// Occupy inside a caller's transaction (order creation)
pub(crate) async fn occupy_in(
    conn: &mut SqliteConnection,
    table_no: i64,
    now: i64,
) -> CoreResult<DiningTable> {
    let table =
        dining_table::set_occupancy(&mut *conn, table_no, TableStatus::Occupied, Some(now), now)
            .await?;
    tracing::info!(table_no, "Table occupied");
    Ok(table)
}

/// Mark a table available. Freeing an available table changes nothing.
pub async fn free(
    pool: &SqlitePool,
    table_no: i64,
    now: i64,
    expected_version: Option<i64>,
) -> CoreResult<DiningTable> {
    let mut tx = db::begin_immediate(pool).await?;
    let current = load(&mut tx, table_no).await?;
    check_version(expected_version, current.version)?;
    if !current.is_occupied() {
        return Ok(current);
    }

    let table =
        dining_table::set_occupancy(&mut *tx, table_no, TableStatus::Available, None, now).await?;
    tx.commit().await?;
    tracing::info!(table_no, "Table freed");
    Ok(table)
}

/// Staff manual override; the caller must confirm it explicitly.
pub async fn set_status(
    pool: &SqlitePool,
    table_no: i64,
    update: &TableStatusUpdate,
    now: i64,
) -> CoreResult<DiningTable> {
    if !update.confirm {
        return Err(CoreError::validation_with(
            ErrorCode::TableConfirmationRequired,
            format!("Changing table {table_no} requires confirmation"),
        ));
    }
    if update.occupy {
        occupy(pool, table_no, now, update.expected_version).await
    } else {
        free(pool, table_no, now, update.expected_version).await
    }
}

async fn load(conn: &mut SqliteConnection, table_no: i64) -> CoreResult<DiningTable> {
    dining_table::find_by_no(&mut *conn, table_no)
        .await?
        .ok_or(CoreError::not_found(Entity::Table, table_no))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_pool;

    const HOUR: i64 = 3_600_000;
    const T0: i64 = 1_700_000_000_000;

    async fn seeded_pool() -> SqlitePool {
        let pool = test_pool().await;
        assert_eq!(seed_tables(&pool, 6, 0).await.unwrap(), 6);
        pool
    }

    fn assert_invariant(table: &DiningTable) {
        assert_eq!(table.occupied_at.is_some(), table.is_occupied());
    }

    #[tokio::test]
    async fn test_seed_only_once() {
        let pool = seeded_pool().await;
        assert_eq!(seed_tables(&pool, 10, 0).await.unwrap(), 0);
        let tables = list_tables(&pool, T0, HOUR).await.unwrap();
        assert_eq!(
            tables.iter().map(|t| t.table_no).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert!(tables.iter().all(|t| t.status == TableStatus::Available));
    }

    #[tokio::test]
    async fn test_seed_succeeds_on_every_fresh_database() {
        for _ in 0..200 {
            let pool = test_pool().await;
            assert_eq!(seed_tables(&pool, 6, 0).await.unwrap(), 6);
            pool.close().await;
        }
    }

    #[tokio::test]
    async fn test_occupy_then_free() {
        let pool = seeded_pool().await;
        let t = occupy(&pool, 3, T0, None).await.unwrap();
        assert_eq!(t.status, TableStatus::Occupied);
        assert_eq!(t.occupied_at, Some(T0));
        assert_invariant(&t);

        // re-occupying restarts the timer
        let t = occupy(&pool, 3, T0 + 10, None).await.unwrap();
        assert_eq!(t.occupied_at, Some(T0 + 10));

        let t = free(&pool, 3, T0 + 20, None).await.unwrap();
        assert_eq!(t.status, TableStatus::Available);
        assert_invariant(&t);
    }

    #[tokio::test]
    async fn test_free_is_idempotent() {
        let pool = seeded_pool().await;
        occupy(&pool, 2, T0, None).await.unwrap();
        let once = free(&pool, 2, T0 + 1, None).await.unwrap();
        let twice = free(&pool, 2, T0 + 2, None).await.unwrap();
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_unknown_table() {
        let pool = seeded_pool().await;
        for err in [
            occupy(&pool, 42, T0, None).await.unwrap_err(),
            free(&pool, 42, T0, None).await.unwrap_err(),
            get_table(&pool, 42, T0, HOUR).await.unwrap_err(),
        ] {
            assert!(matches!(
                err,
                CoreError::NotFound {
                    entity: Entity::Table,
                    id: 42
                }
            ));
        }
    }

    #[tokio::test]
    async fn test_staleness_boundary() {
        let pool = seeded_pool().await;
        occupy(&pool, 1, T0, None).await.unwrap();

        let t = get_table(&pool, 1, T0 + 3_599_000, HOUR).await.unwrap();
        assert!(t.is_occupied());
        let t = get_table(&pool, 1, T0 + HOUR, HOUR).await.unwrap();
        assert!(t.is_occupied());

        let t = get_table(&pool, 1, T0 + 3_601_000, HOUR).await.unwrap();
        assert_eq!(t.status, TableStatus::Available);
        assert_eq!(t.occupied_at, None);

        // reclamation was persisted
        let stored = dining_table::find_by_no(&pool, 1).await.unwrap().unwrap();
        assert_eq!(stored, t);
    }

    #[tokio::test]
    async fn test_list_reclaims_only_stale() {
        let pool = seeded_pool().await;
        occupy(&pool, 1, T0, None).await.unwrap();
        occupy(&pool, 2, T0 + 2 * HOUR, None).await.unwrap();

        let tables = list_tables(&pool, T0 + 2 * HOUR + 1, HOUR).await.unwrap();
        assert!(!tables[0].is_occupied());
        assert!(tables[1].is_occupied());
        tables.iter().for_each(assert_invariant);
    }

    #[tokio::test]
    async fn test_set_status_requires_confirmation() {
        let pool = seeded_pool().await;
        let update = TableStatusUpdate {
            occupy: true,
            confirm: false,
            expected_version: None,
        };
        let err = set_status(&pool, 4, &update, T0).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation {
                code: ErrorCode::TableConfirmationRequired,
                ..
            }
        ));

        let update = TableStatusUpdate {
            confirm: true,
            ..update
        };
        assert!(set_status(&pool, 4, &update, T0).await.unwrap().is_occupied());
    }

    #[tokio::test]
    async fn test_stale_version_rejected() {
        let pool = seeded_pool().await;
        let t = occupy(&pool, 5, T0, None).await.unwrap();
        let err = free(&pool, 5, T0 + 1, Some(t.version - 1)).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict { .. }));
        assert!(free(&pool, 5, T0 + 1, Some(t.version)).await.is_ok());
    }
}

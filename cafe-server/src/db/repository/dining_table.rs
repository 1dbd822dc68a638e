//! Dining Table Repository

use super::{RepoError, RepoResult};
use shared::models::{DiningTable, TableStatus};
use sqlx::{Executor, Sqlite};

pub async fn count<'e, E>(executor: E) -> RepoResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dining_table")
        .fetch_one(executor)
        .await?;
    Ok(count)
}

pub async fn find_all<'e, E>(executor: E) -> RepoResult<Vec<DiningTable>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let tables = sqlx::query_as::<_, DiningTable>(
        "SELECT id, table_no, status, occupied_at, version, updated_at FROM dining_table ORDER BY table_no",
    )
    .fetch_all(executor)
    .await?;
    Ok(tables)
}

pub async fn find_by_no<'e, E>(executor: E, table_no: i64) -> RepoResult<Option<DiningTable>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, table_no, status, occupied_at, version, updated_at FROM dining_table WHERE table_no = ?",
    )
    .bind(table_no)
    .fetch_optional(executor)
    .await?;
    Ok(table)
}

/// Insert an available table; existing numbers are left untouched.
///
/// The row id is assigned by SQLite, tables are addressed by `table_no`.
pub async fn insert_if_missing<'e, E>(executor: E, table_no: i64, now: i64) -> RepoResult<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        "INSERT INTO dining_table (table_no, status, occupied_at, version, updated_at) \
         VALUES (?, 'available', NULL, 0, ?) ON CONFLICT(table_no) DO NOTHING",
    )
    .bind(table_no)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Write occupancy and bump the version.
///
/// `occupied_at` must be `Some` exactly when `status` is occupied; the schema
/// rejects anything else.
pub async fn set_occupancy<'e, E>(
    executor: E,
    table_no: i64,
    status: TableStatus,
    occupied_at: Option<i64>,
    now: i64,
) -> RepoResult<DiningTable>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, DiningTable>(
        "UPDATE dining_table SET status = ?1, occupied_at = ?2, version = version + 1, updated_at = ?3 \
         WHERE table_no = ?4 \
         RETURNING id, table_no, status, occupied_at, version, updated_at",
    )
    .bind(status)
    .bind(occupied_at)
    .bind(now)
    .bind(table_no)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Table {table_no} not found")))
}

/// Free a table only if nobody touched it since `version` was read.
///
/// Returns `None` when the row moved on (re-occupied by a concurrent order).
pub async fn release_if_unchanged<'e, E>(
    executor: E,
    table_no: i64,
    version: i64,
    now: i64,
) -> RepoResult<Option<DiningTable>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let table = sqlx::query_as::<_, DiningTable>(
        "UPDATE dining_table SET status = 'available', occupied_at = NULL, version = version + 1, updated_at = ?1 \
         WHERE table_no = ?2 AND version = ?3 \
         RETURNING id, table_no, status, occupied_at, version, updated_at",
    )
    .bind(now)
    .bind(table_no)
    .bind(version)
    .fetch_optional(executor)
    .await?;
    Ok(table)
}

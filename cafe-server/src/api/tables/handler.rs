//! Dining Table API Handlers

use axum::{Json, extract::State};
use shared::models::{DiningTable, TableStatusUpdate};
use shared::util::now_millis;

use crate::core::ServerState;
use crate::tables;
use crate::utils::{ApiJson, ApiPath, AppResult};

/// GET /api/tables - 获取所有桌台 (超时占用会被自动释放)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = tables::list_tables(&state.pool, now_millis(), state.stale_after_millis()).await?;
    Ok(Json(tables))
}

/// GET /api/tables/{table_no} - 获取单个桌台
pub async fn get_by_no(
    State(state): State<ServerState>,
    ApiPath(table_no): ApiPath<i64>,
) -> AppResult<Json<DiningTable>> {
    let table =
        tables::get_table(&state.pool, table_no, now_millis(), state.stale_after_millis()).await?;
    Ok(Json(table))
}

/// PUT /api/tables/{table_no} - 手动占用/释放桌台 (需确认)
pub async fn set_status(
    State(state): State<ServerState>,
    ApiPath(table_no): ApiPath<i64>,
    ApiJson(payload): ApiJson<TableStatusUpdate>,
) -> AppResult<Json<DiningTable>> {
    let table = tables::set_status(&state.pool, table_no, &payload, now_millis()).await?;
    Ok(Json(table))
}

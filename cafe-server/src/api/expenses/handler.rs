//! Expense API Handlers

use axum::{Json, extract::State};
use shared::error::ApiResponse;
use shared::models::{Expense, ExpenseCreate, ExpenseQuery};
use shared::util::{month_start_millis, now_millis};

use crate::core::ServerState;
use crate::expenses;
use crate::utils::{ApiJson, ApiPath, ApiQuery, AppResult};

/// GET /api/expenses?from=&to= - 支出列表 (默认本月)
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<ExpenseQuery>,
) -> AppResult<Json<Vec<Expense>>> {
    let from = query.from.unwrap_or_else(|| month_start_millis(now_millis()));
    let to = query.to.unwrap_or(i64::MAX);
    let expenses = expenses::list_expenses(&state.pool, from, to).await?;
    Ok(Json(expenses))
}

/// POST /api/expenses - 添加支出
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<ExpenseCreate>,
) -> AppResult<Json<Expense>> {
    let expense = expenses::add_expense(&state.pool, payload, now_millis()).await?;
    Ok(Json(expense))
}

/// DELETE /api/expenses/{id} - 删除支出
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<ApiResponse<()>> {
    expenses::delete_expense(&state.pool, id).await?;
    Ok(ApiResponse::ok())
}

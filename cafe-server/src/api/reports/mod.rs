//! Report API 模块

use axum::{Json, Router, extract::State, routing::get};
use shared::models::SalesReport;
use shared::util::now_millis;

use crate::core::ServerState;
use crate::reports;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/reports", get(report))
}

/// GET /api/reports - 今日/本月营收、本月支出和最近销售
async fn report(State(state): State<ServerState>) -> AppResult<Json<SalesReport>> {
    let report = reports::report(&state.pool, now_millis()).await?;
    Ok(Json(report))
}

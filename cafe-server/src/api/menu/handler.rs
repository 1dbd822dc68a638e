//! Menu API Handlers

use axum::{Json, extract::State};
use shared::models::{MenuAvailabilityUpdate, MenuItem, MenuQuery};
use shared::util::now_millis;

use crate::core::ServerState;
use crate::menu;
use crate::utils::{ApiJson, ApiPath, ApiQuery, AppResult};

/// GET /api/menu?available=true - 菜单 (按分类、名称排序)
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<MenuQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu::list_menu(&state.pool, &query).await?;
    Ok(Json(items))
}

/// PUT /api/menu/{id}/availability - 售罄 / 恢复供应
pub async fn update_availability(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<MenuAvailabilityUpdate>,
) -> AppResult<Json<MenuItem>> {
    let item = menu::set_availability(&state.pool, id, payload.is_available, now_millis()).await?;
    Ok(Json(item))
}

//! User API 模块

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use shared::models::{User, UserUpsert};
use shared::util::now_millis;

use crate::core::ServerState;
use crate::users;
use crate::utils::{ApiJson, ApiPath, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/users", post(upsert))
        .route("/api/users/{id}", get(get_by_id))
}

/// POST /api/users - 按手机号注册或更新用户
async fn upsert(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<UserUpsert>,
) -> AppResult<Json<User>> {
    let user = users::upsert_by_phone(&state.pool, payload, now_millis()).await?;
    Ok(Json(user))
}

/// GET /api/users/{id} - 获取用户
async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<User>> {
    let user = users::get_user(&state.pool, id).await?;
    Ok(Json(user))
}

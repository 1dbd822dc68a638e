//! Order API Handlers

use axum::{Json, extract::State};
use shared::models::{
    Order, OrderCreate, OrderQuery, OrderStatusUpdate, PaymentStatusUpdate, VersionQuery,
};
use shared::util::now_millis;

use crate::core::ServerState;
use crate::orders;
use crate::utils::{ApiJson, ApiPath, ApiQuery, AppResult};

/// GET /api/orders?status=active&user_id= - 订单列表 (新订单在前)
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<OrderQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = orders::list_orders(&state.pool, &query).await?;
    Ok(Json(orders))
}

/// POST /api/orders - 下单并占用桌台
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<OrderCreate>,
) -> AppResult<Json<Order>> {
    let order = orders::create_order(&state.pool, payload, now_millis()).await?;
    Ok(Json(order))
}

/// GET /api/orders/{id} - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Order>> {
    let order = orders::get_order(&state.pool, id).await?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}/status - 推进订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = orders::advance_status(
        &state.pool,
        id,
        payload.status,
        payload.expected_version,
        now_millis(),
    )
    .await?;
    Ok(Json(order))
}

/// POST /api/orders/{id}/cancel?expected_version= - 取消订单
pub async fn cancel(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<VersionQuery>,
) -> AppResult<Json<Order>> {
    let order = orders::cancel(&state.pool, id, query.expected_version, now_millis()).await?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}/payment-status - 员工设置支付状态
pub async fn update_payment_status(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<PaymentStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = orders::mark_payment_status(
        &state.pool,
        id,
        payload.status,
        payload.reference,
        payload.expected_version,
        now_millis(),
    )
    .await?;
    Ok(Json(order))
}

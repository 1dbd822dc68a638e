//! Payment API Handlers

use axum::{Json, extract::State};
use shared::models::{Order, PaymentSubmit, PaymentView};
use shared::util::now_millis;

use crate::core::ServerState;
use crate::payments;
use crate::utils::{ApiJson, ApiPath, AppResult};

/// GET /api/payments/{order_id} - 支付页面数据 (含 UPI 链接)
pub async fn get_view(
    State(state): State<ServerState>,
    ApiPath(order_id): ApiPath<i64>,
) -> AppResult<Json<PaymentView>> {
    let view = payments::get_payment_view(&state.pool, &state.config.merchant, order_id).await?;
    Ok(Json(view))
}

/// PUT /api/payments/{order_id} - 提交 UTR 并标记已支付
pub async fn submit(
    State(state): State<ServerState>,
    ApiPath(order_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<PaymentSubmit>,
) -> AppResult<Json<Order>> {
    let order = payments::submit_reference(&state.pool, order_id, &payload.utr, now_millis()).await?;
    Ok(Json(order))
}

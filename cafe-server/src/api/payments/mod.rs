//! Payment API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/payments/{order_id}",
        get(handler::get_view).put(handler::submit),
    )
}

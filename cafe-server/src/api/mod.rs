//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`tables`] - 桌台占用接口
//! - [`menu`] - 菜单和售罄开关
//! - [`orders`] - 订单生命周期接口
//! - [`payments`] - 支付页面和 UTR 提交
//! - [`reports`] - 营收报表
//! - [`expenses`] - 支出记录
//! - [`users`] - 用户记录

pub mod expenses;
pub mod health;
pub mod menu;
pub mod orders;
pub mod payments;
pub mod reports;
pub mod tables;
pub mod users;

use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(tables::router())
        .merge(menu::router())
        .merge(orders::router())
        .merge(payments::router())
        .merge(reports::router())
        .merge(expenses::router())
        .merge(users::router())
}

/// Build a fully configured application with all middleware and state
///
/// Used by both the HTTP server and in-process (oneshot) callers
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    build_router()
        .with_state(state)
        // Timeout - 超时返回 408
        .layer(TimeoutLayer::new(timeout))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}

//! 集成测试公共工具

#![allow(dead_code)]

use std::path::Path;

use cafe_server::{Config, ServerState};
use shared::models::{OrderCreate, OrderItem, PaymentMethod};

pub const TABLE_COUNT: i64 = 6;

/// 内存数据库 + 已初始化桌台
pub async fn test_state() -> ServerState {
    state_at("sqlite::memory:").await
}

/// `dir` 下的文件数据库 (WAL, 连接池多连接)
pub async fn file_state(dir: &Path) -> ServerState {
    state_at(&format!("sqlite://{}", dir.join("cafe.db").display())).await
}

async fn state_at(url: &str) -> ServerState {
    let mut config = Config::with_overrides(url, 0);
    config.table_count = TABLE_COUNT;
    config.table_stale_secs = 3600;
    config.merchant.upi_id = "cafe@okbank".into();
    config.merchant.name = "Chai Corner".into();
    ServerState::initialize(&config)
        .await
        .expect("failed to initialize test state")
}

pub fn item(name: &str, price: f64, quantity: i64) -> OrderItem {
    OrderItem {
        name: name.into(),
        price,
        quantity,
    }
}

/// 现金下单: table_no + 商品
pub fn cash_order(table_no: i64, items: Vec<OrderItem>) -> OrderCreate {
    OrderCreate {
        table_no,
        items,
        payment_method: PaymentMethod::Cash,
        note: None,
        user_id: None,
    }
}

//! Cafe Server - 扫码点餐与 UPI 对账后端
//!
//! # 架构概述
//!
//! - **桌台** (`tables`): 桌台占用、超时自动释放
//! - **菜单** (`menu`): 菜品目录、售罄开关、下单校验
//! - **订单** (`orders`): 下单、状态流转、取消、支付状态
//! - **支付** (`payments`): UPI 链接生成与 UTR 提交
//! - **报表** (`reports`): 营收、支出、净利润
//! - **数据库** (`db`): SQLite 存储 (sqlx)
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── db/            # 连接池、迁移、仓储
//! ├── api/           # HTTP 路由和处理器
//! ├── tables/        # 桌台占用
//! ├── menu/          # 菜单目录
//! ├── orders/        # 订单生命周期与金额计算
//! ├── payments/      # UPI 支付对账
//! ├── expenses/      # 支出记录
//! ├── reports/       # 营收报表
//! ├── users/         # 用户记录
//! └── utils/         # 日志、校验、提取器
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod expenses;
pub mod menu;
pub mod orders;
pub mod payments;
pub mod reports;
pub mod tables;
pub mod users;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, CoreError, CoreResult, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境
///
/// 1. 加载 `.env` (不存在时忽略)
/// 2. 按 `LOG_LEVEL` / `LOG_DIR` 初始化日志
pub fn setup_environment() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => anyhow::bail!("failed to load .env: {e}"),
    }

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______       ____
  / ____/___ _ / __/__
 / /   / __ `// /_/ _ \
/ /___/ /_/ // __/  __/
\____/\__,_//_/  \___/
    "#
    );
}

use shared::error::AppError;
use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::{menu, tables};

/// 服务器状态 - 持有配置和数据库连接池
///
/// 所有字段都是廉价克隆 (连接池内部为 Arc)，可直接作为 axum State 使用。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// 初始化服务器状态
    ///
    /// 1. 打开数据库并执行迁移
    /// 2. 桌台表为空时按 `TABLE_COUNT` 创建桌台
    /// 3. 菜单为空时写入默认菜单
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url).await?;
        let now = shared::util::now_millis();

        let seeded = tables::seed_tables(&db.pool, config.table_count, now)
            .await
            .map_err(AppError::from)?;
        if seeded > 0 {
            tracing::info!(count = seeded, "Seeded dining tables");
        }

        let seeded = menu::seed_menu(&db.pool, now).await.map_err(AppError::from)?;
        if seeded > 0 {
            tracing::info!(count = seeded, "Seeded menu");
        }

        Ok(Self::new(config.clone(), db.pool))
    }

    /// 桌台占用超时 (毫秒)
    pub fn stale_after_millis(&self) -> i64 {
        self.config.stale_after_millis()
    }
}

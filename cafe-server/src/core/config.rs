use std::str::FromStr;

/// UPI payee details rendered on the pay screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantConfig {
    /// 收款 VPA (pa)
    pub upi_id: String,
    /// 收款方显示名称 (pn)
    pub name: String,
    /// 商户类别码 (mc)，5812 = 餐厅
    pub code: String,
}

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | sqlite:cafe.db | 数据库连接串 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录 (存在时按天滚动写文件) |
/// | TABLE_COUNT | 6 | 初始化时创建的桌台数量 |
/// | TABLE_STALE_SECS | 3600 | 桌台占用超时 (秒) |
/// | MERCHANT_UPI_ID | cafe@upi | 收款 VPA |
/// | MERCHANT_NAME | Cafe | 收款方名称 |
/// | MERCHANT_CODE | 5812 | 商户类别码 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// 数值无法解析时回退到默认值。
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/cafe.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub table_count: i64,
    pub table_stale_secs: i64,
    pub merchant: MerchantConfig,
    pub request_timeout_ms: u64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            database_url: env_or("DATABASE_URL", "sqlite:cafe.db"),
            http_port: env_parse("HTTP_PORT", 3000),
            environment: env_or("ENVIRONMENT", "development"),
            log_level: env_or("LOG_LEVEL", "info"),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            table_count: env_parse("TABLE_COUNT", 6),
            table_stale_secs: env_parse("TABLE_STALE_SECS", 3600),
            merchant: MerchantConfig {
                upi_id: env_or("MERCHANT_UPI_ID", "cafe@upi"),
                name: env_or("MERCHANT_NAME", "Cafe"),
                code: env_or("MERCHANT_CODE", "5812"),
            },
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config.http_port = http_port;
        config
    }

    /// 占用超时 (毫秒)
    pub fn stale_after_millis(&self) -> i64 {
        self.table_stale_secs.saturating_mul(1000)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parse_falls_back_on_garbage() {
        // SAFETY: the variable name is unique to this test
        unsafe { std::env::set_var("CAFE_TEST_PARSE_GARBAGE", "sixty") };
        assert_eq!(env_parse("CAFE_TEST_PARSE_GARBAGE", 60i64), 60);
        unsafe { std::env::set_var("CAFE_TEST_PARSE_GARBAGE", " 90 ") };
        assert_eq!(env_parse("CAFE_TEST_PARSE_GARBAGE", 60i64), 90);
        assert_eq!(env_parse("CAFE_TEST_PARSE_UNSET", 7u16), 7);
    }

    #[test]
    fn test_overrides_and_helpers() {
        let mut config = Config::with_overrides("sqlite::memory:", 0);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.http_port, 0);

        config.table_stale_secs = 3600;
        assert_eq!(config.stale_after_millis(), 3_600_000);

        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}

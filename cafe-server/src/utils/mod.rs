//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - 日志初始化
//! - [`validation`] - 输入校验
//! - [`extract`] - 请求体、路径和查询参数提取器 (统一错误响应)

pub mod extract;
pub mod logger;
pub mod validation;

pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

//! 核心模块 - 服务器配置、状态和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 服务器配置
//! - [`ServerState`] - 服务器状态
//! - [`Server`] - HTTP 服务器
//! - [`CoreError`] - 状态机错误

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, MerchantConfig};
pub use error::{CoreError, CoreResult, Entity, check_version};
pub use server::Server;
pub use state::ServerState;

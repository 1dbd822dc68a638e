//! Data models
//!
//! Shared between cafe-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64`, timestamps are Unix millis.

pub mod dining_table;
pub mod expense;
pub mod menu;
pub mod order;
pub mod payment;
pub mod report;
pub mod user;

// Re-exports
pub use dining_table::*;
pub use expense::*;
pub use menu::*;
pub use order::*;
pub use payment::*;
pub use report::*;
pub use user::*;

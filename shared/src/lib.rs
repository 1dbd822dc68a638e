//! Shared types for the cafe ordering backend
//!
//! Entity models, request payloads, the unified error system and small
//! utilities used by `cafe-server` and by any client talking to its API.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

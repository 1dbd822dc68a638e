//! 核心错误类型
//!
//! 状态机层的错误分类，边界层通过 `From<CoreError> for AppError`
//! 映射为统一错误码和 HTTP 状态码。

use std::fmt;

use shared::error::{AppError, ErrorCode};
use shared::models::OrderStatus;
use thiserror::Error;

use crate::db::repository::RepoError;

/// Entity kinds a lookup can miss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    MenuItem,
    Order,
    Table,
    Expense,
    User,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MenuItem => "Menu item",
            Self::Order => "Order",
            Self::Table => "Table",
            Self::Expense => "Expense",
            Self::User => "User",
        })
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed input; `code` narrows the reason for API clients
    #[error("{message}")]
    Validation { code: ErrorCode, message: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: i64 },

    #[error("cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("order {order_id} must be paid before it can be completed")]
    PaymentRequired { order_id: i64 },

    #[error("stale write: expected version {expected}, found {actual}")]
    Conflict { expected: i64, actual: i64 },

    #[error("storage error: {0}")]
    Storage(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
        }
    }

    pub fn validation_with(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(entity: Entity, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Reject the write when the caller pinned a version that is no longer current
pub fn check_version(expected: Option<i64>, actual: i64) -> CoreResult<()> {
    match expected {
        Some(expected) if expected != actual => Err(CoreError::Conflict { expected, actual }),
        _ => Ok(()),
    }
}

impl From<RepoError> for CoreError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(msg) => Self::validation(msg),
            // Existence and uniqueness are resolved before writing, a miss or
            // a key clash here is a storage fault rather than bad input
            RepoError::NotFound(msg) | RepoError::Duplicate(msg) | RepoError::Database(msg) => {
                Self::Storage(msg)
            }
        }
    }
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::from(err).into()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::Validation { code, .. } => AppError::with_message(code, message),
            CoreError::NotFound { entity, id } => {
                let code = match entity {
                    Entity::MenuItem => ErrorCode::MenuItemNotFound,
                    Entity::Order => ErrorCode::OrderNotFound,
                    Entity::Table => ErrorCode::TableNotFound,
                    Entity::Expense => ErrorCode::ExpenseNotFound,
                    Entity::User => ErrorCode::UserNotFound,
                };
                AppError::with_message(code, message).with_detail("id", id)
            }
            CoreError::InvalidTransition { from, to } => {
                let code = match from {
                    OrderStatus::Completed => ErrorCode::OrderAlreadyCompleted,
                    OrderStatus::Cancelled => ErrorCode::OrderAlreadyCancelled,
                    _ => ErrorCode::OrderInvalidTransition,
                };
                AppError::with_message(code, message)
                    .with_detail("from", from.as_str())
                    .with_detail("to", to.as_str())
            }
            CoreError::PaymentRequired { order_id } => {
                AppError::with_message(ErrorCode::PaymentRequired, message)
                    .with_detail("order_id", order_id)
            }
            CoreError::Conflict { expected, actual } => AppError::version_conflict(expected, actual),
            CoreError::Storage(detail) => {
                tracing::error!(error = %detail, "Storage failure");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_check_version() {
        assert!(check_version(None, 4).is_ok());
        assert!(check_version(Some(4), 4).is_ok());
        assert!(matches!(
            check_version(Some(3), 4),
            Err(CoreError::Conflict {
                expected: 3,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(CoreError, ErrorCode, StatusCode)> = vec![
            (
                CoreError::validation("items must not be empty"),
                ErrorCode::ValidationFailed,
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::validation_with(ErrorCode::PaymentInvalidReference, "bad utr"),
                ErrorCode::PaymentInvalidReference,
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::not_found(Entity::MenuItem, 3),
                ErrorCode::MenuItemNotFound,
                StatusCode::NOT_FOUND,
            ),
            (
                CoreError::not_found(Entity::Table, 9),
                ErrorCode::TableNotFound,
                StatusCode::NOT_FOUND,
            ),
            (
                CoreError::InvalidTransition {
                    from: OrderStatus::Pending,
                    to: OrderStatus::Completed,
                },
                ErrorCode::OrderInvalidTransition,
                StatusCode::CONFLICT,
            ),
            (
                CoreError::InvalidTransition {
                    from: OrderStatus::Cancelled,
                    to: OrderStatus::Preparing,
                },
                ErrorCode::OrderAlreadyCancelled,
                StatusCode::CONFLICT,
            ),
            (
                CoreError::PaymentRequired { order_id: 1 },
                ErrorCode::PaymentRequired,
                StatusCode::PAYMENT_REQUIRED,
            ),
            (
                CoreError::Conflict {
                    expected: 1,
                    actual: 2,
                },
                ErrorCode::VersionConflict,
                StatusCode::CONFLICT,
            ),
            (
                CoreError::Storage("disk I/O error".into()),
                ErrorCode::DatabaseError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core, code, status) in cases {
            let app: AppError = core.into();
            assert_eq!(app.code, code);
            assert_eq!(app.http_status(), status);
        }
    }

    #[test]
    fn test_storage_detail_not_leaked() {
        let app: AppError = CoreError::Storage("secret path /var/db".into()).into();
        assert!(!app.message.contains("/var/db"));
    }

    #[test]
    fn test_repo_error_mapping() {
        assert!(matches!(
            CoreError::from(RepoError::Database("locked".into())),
            CoreError::Storage(_)
        ));
        assert!(matches!(
            CoreError::from(RepoError::Duplicate("UNIQUE constraint failed: orders.id".into())),
            CoreError::Storage(_)
        ));
        assert!(matches!(
            CoreError::from(RepoError::Validation("CHECK constraint failed".into())),
            CoreError::Validation { .. }
        ));
    }
}

//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::MenuItemNotFound
            | Self::OrderNotFound
            | Self::ExpenseNotFound
            | Self::TableNotFound
            | Self::UserNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::VersionConflict
            | Self::OrderAlreadyCompleted
            | Self::OrderAlreadyCancelled
            | Self::OrderInvalidTransition => StatusCode::CONFLICT,

            // 402 Payment Required
            Self::PaymentRequired => StatusCode::PAYMENT_REQUIRED,

            // 500 Internal Server Error
            Self::Unknown
            | Self::InternalError
            | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

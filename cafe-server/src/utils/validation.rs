//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement.

use crate::core::{CoreError, CoreResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menu item names, expense titles, user names
pub const MAX_NAME_LEN: usize = 200;

/// Notes and kitchen instructions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, category, payment reference
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(CoreError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> CoreResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(CoreError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Trim an optional string, turning blank into `None`
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

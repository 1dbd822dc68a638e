//! Users (customers and staff), keyed by phone number.
//!
//! OTP delivery and sessions live outside this service; these operations only
//! keep the records orders point at.

use shared::models::{User, UserUpsert};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

use crate::core::{CoreError, CoreResult, Entity};
use crate::db::repository::user as user_repo;
use crate::utils::validation::{MAX_NAME_LEN, normalize_optional, validate_optional_text};

/// Normalize a phone number: optional leading `+`, then 7 to 15 digits.
pub fn normalize_phone(phone: &str) -> CoreResult<String> {
    let phone = phone.trim();
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if !(7..=15).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::validation(format!("Invalid phone number: {phone:?}")));
    }
    Ok(phone.to_string())
}

pub async fn upsert_by_phone(pool: &SqlitePool, input: UserUpsert, now: i64) -> CoreResult<User> {
    let phone = normalize_phone(&input.phone)?;
    let name = normalize_optional(input.name);
    validate_optional_text(&name, "name", MAX_NAME_LEN)?;

    let user = user_repo::upsert_by_phone(pool, snowflake_id(), &phone, name.as_deref(), now).await?;
    tracing::info!(user_id = user.id, "User upserted");
    Ok(user)
}

pub async fn get_user(pool: &SqlitePool, id: i64) -> CoreResult<User> {
    user_repo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::not_found(Entity::User, id))
}

//! User Repository

use super::{RepoError, RepoResult};
use shared::models::User;
use sqlx::{Executor, Sqlite};

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> RepoResult<Option<User>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let user = sqlx::query_as::<_, User>(
        "SELECT id, phone, name, role, is_verified, created_at FROM app_user WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(user)
}

/// Create the user for `phone`, or refresh its name when one is given.
pub async fn upsert_by_phone<'e, E>(
    executor: E,
    id: i64,
    phone: &str,
    name: Option<&str>,
    now: i64,
) -> RepoResult<User>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, User>(
        "INSERT INTO app_user (id, phone, name, role, is_verified, created_at) \
         VALUES (?1, ?2, ?3, 'user', 0, ?4) \
         ON CONFLICT(phone) DO UPDATE SET name = COALESCE(excluded.name, app_user.name) \
         RETURNING id, phone, name, role, is_verified, created_at",
    )
    .bind(id)
    .bind(phone)
    .bind(name)
    .bind(now)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| RepoError::Database(format!("Failed to upsert user {phone}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_pool;
    use shared::models::UserRole;

    #[tokio::test]
    async fn test_upsert_keeps_id_and_name() {
        let pool = test_pool().await;
        let first = upsert_by_phone(&pool, 10, "9876543210", Some("Asha"), 1)
            .await
            .unwrap();
        assert_eq!(first.role, UserRole::User);
        assert!(!first.is_verified);

        let again = upsert_by_phone(&pool, 11, "9876543210", None, 2)
            .await
            .unwrap();
        assert_eq!(again.id, 10);
        assert_eq!(again.name.as_deref(), Some("Asha"));

        let found = find_by_id(&pool, 10).await.unwrap().unwrap();
        assert_eq!(found, again);
        assert!(find_by_id(&pool, 11).await.unwrap().is_none());
    }
}

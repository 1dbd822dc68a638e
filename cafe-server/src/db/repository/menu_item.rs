//! Menu Item Repository

use super::RepoResult;
use shared::models::{MenuItem, MenuItemCreate};
use sqlx::{Executor, Sqlite};

const MENU_COLUMNS: &str =
    "id, name, price, category, description, image, is_available, created_at, updated_at";

pub async fn count<'e, E>(executor: E) -> RepoResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_item")
        .fetch_one(executor)
        .await?;
    Ok(count)
}

/// Insert an available item; an existing name is left untouched.
pub async fn insert_if_missing<'e, E>(executor: E, item: &MenuItemCreate, now: i64) -> RepoResult<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        "INSERT INTO menu_item (name, price, category, description, image, is_available, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?6) ON CONFLICT(name) DO NOTHING",
    )
    .bind(&item.name)
    .bind(item.price)
    .bind(&item.category)
    .bind(&item.description)
    .bind(&item.image)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Menu sorted by category then name; `available_only` hides sold-out items
pub async fn find_all<'e, E>(executor: E, available_only: bool) -> RepoResult<Vec<MenuItem>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "SELECT {MENU_COLUMNS} FROM menu_item WHERE (?1 = 0 OR is_available = 1) ORDER BY category, name"
    );
    let items = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(available_only)
        .fetch_all(executor)
        .await?;
    Ok(items)
}

pub async fn find_by_name<'e, E>(executor: E, name: &str) -> RepoResult<Option<MenuItem>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("SELECT {MENU_COLUMNS} FROM menu_item WHERE name = ?");
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(name)
        .fetch_optional(executor)
        .await?;
    Ok(item)
}

/// Returns `None` when no item has this id
pub async fn set_available<'e, E>(
    executor: E,
    id: i64,
    is_available: bool,
    now: i64,
) -> RepoResult<Option<MenuItem>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "UPDATE menu_item SET is_available = ?1, updated_at = ?2 WHERE id = ?3 RETURNING {MENU_COLUMNS}"
    );
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(is_available)
        .bind(now)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_pool;

    fn create(name: &str, price: f64, category: &str) -> MenuItemCreate {
        MenuItemCreate {
            name: name.into(),
            price,
            category: category.into(),
            description: String::new(),
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_if_missing_keeps_first() {
        let pool = test_pool().await;
        assert!(insert_if_missing(&pool, &create("Tea", 20.0, "Hot"), 1).await.unwrap());
        assert!(!insert_if_missing(&pool, &create("Tea", 25.0, "Hot"), 2).await.unwrap());
        assert_eq!(count(&pool).await.unwrap(), 1);

        let tea = find_by_name(&pool, "Tea").await.unwrap().unwrap();
        assert_eq!(tea.price, 20.0);
        assert!(tea.is_available);
        assert!(find_by_name(&pool, "tea").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_order_and_filter() {
        let pool = test_pool().await;
        insert_if_missing(&pool, &create("Veg Momos", 79.0, "Momos"), 1).await.unwrap();
        insert_if_missing(&pool, &create("Tea", 20.0, "Hot"), 1).await.unwrap();
        insert_if_missing(&pool, &create("Bournvita", 50.0, "Hot"), 1).await.unwrap();

        let names = |items: Vec<MenuItem>| items.into_iter().map(|i| i.name).collect::<Vec<_>>();
        assert_eq!(
            names(find_all(&pool, false).await.unwrap()),
            vec!["Bournvita", "Tea", "Veg Momos"]
        );

        let tea = find_by_name(&pool, "Tea").await.unwrap().unwrap();
        let sold_out = set_available(&pool, tea.id, false, 9).await.unwrap().unwrap();
        assert!(!sold_out.is_available);
        assert_eq!(sold_out.updated_at, 9);
        assert_eq!(
            names(find_all(&pool, true).await.unwrap()),
            vec!["Bournvita", "Veg Momos"]
        );
        assert!(set_available(&pool, 999, true, 10).await.unwrap().is_none());
    }
}

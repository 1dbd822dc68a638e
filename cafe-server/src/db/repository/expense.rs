//! Expense Repository

use super::RepoResult;
use shared::models::Expense;
use sqlx::{Executor, Sqlite};

pub async fn insert<'e, E>(executor: E, expense: &Expense) -> RepoResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO expense (id, title, amount, category, date, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(expense.id)
    .bind(&expense.title)
    .bind(expense.amount)
    .bind(&expense.category)
    .bind(expense.date)
    .bind(expense.created_at)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete<'e, E>(executor: E, id: i64) -> RepoResult<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query("DELETE FROM expense WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Expenses dated in `[from, to)`, newest first
pub async fn find_between<'e, E>(executor: E, from: i64, to: i64) -> RepoResult<Vec<Expense>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let expenses = sqlx::query_as::<_, Expense>(
        "SELECT id, title, amount, category, date, created_at FROM expense \
         WHERE date >= ? AND date < ? ORDER BY date DESC, id DESC",
    )
    .bind(from)
    .bind(to)
    .fetch_all(executor)
    .await?;
    Ok(expenses)
}

pub async fn sum_between<'e, E>(executor: E, from: i64, to: i64) -> RepoResult<f64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let total = sqlx::query_scalar::<_, f64>(
        "SELECT COALESCE(SUM(amount), 0.0) FROM expense WHERE date >= ? AND date < ?",
    )
    .bind(from)
    .bind(to)
    .fetch_one(executor)
    .await?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_pool;

    fn expense(id: i64, amount: f64, date: i64) -> Expense {
        Expense {
            id,
            title: format!("Milk #{id}"),
            amount,
            category: "Inventory".into(),
            date,
            created_at: date,
        }
    }

    #[tokio::test]
    async fn test_range_queries() {
        let pool = test_pool().await;
        insert(&pool, &expense(1, 120.0, 100)).await.unwrap();
        insert(&pool, &expense(2, 80.5, 200)).await.unwrap();
        insert(&pool, &expense(3, 10.0, 300)).await.unwrap();

        let found = find_between(&pool, 100, 300).await.unwrap();
        assert_eq!(found.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(sum_between(&pool, 100, 300).await.unwrap(), 200.5);
        assert_eq!(sum_between(&pool, 400, 500).await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_delete_reports_missing() {
        let pool = test_pool().await;
        insert(&pool, &expense(1, 5.0, 1)).await.unwrap();
        assert!(delete(&pool, 1).await.unwrap());
        assert!(!delete(&pool, 1).await.unwrap());
    }
}

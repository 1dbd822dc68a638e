//! Expense ledger: append and delete only.

use shared::models::{DEFAULT_EXPENSE_CATEGORY, Expense, ExpenseCreate};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

use crate::core::{CoreError, CoreResult, Entity};
use crate::db::repository::expense as expense_repo;
use crate::orders::money;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, normalize_optional, validate_optional_text,
    validate_required_text,
};

pub async fn add_expense(pool: &SqlitePool, input: ExpenseCreate, now: i64) -> CoreResult<Expense> {
    validate_required_text(&input.title, "title", MAX_NAME_LEN)?;
    if !input.amount.is_finite() || input.amount < 0.0 {
        return Err(CoreError::validation(format!(
            "amount must be a non-negative number, got {}",
            input.amount
        )));
    }
    let category = normalize_optional(input.category);
    validate_optional_text(&category, "category", MAX_SHORT_TEXT_LEN)?;

    let expense = Expense {
        id: snowflake_id(),
        title: input.title.trim().to_string(),
        amount: money::to_f64(money::to_decimal(input.amount)),
        category: category.unwrap_or_else(|| DEFAULT_EXPENSE_CATEGORY.to_string()),
        date: input.date.unwrap_or(now),
        created_at: now,
    };
    expense_repo::insert(pool, &expense).await?;
    tracing::info!(expense_id = expense.id, amount = expense.amount, category = %expense.category, "Expense added");
    Ok(expense)
}

pub async fn delete_expense(pool: &SqlitePool, id: i64) -> CoreResult<()> {
    if !expense_repo::delete(pool, id).await? {
        return Err(CoreError::not_found(Entity::Expense, id));
    }
    tracing::info!(expense_id = id, "Expense deleted");
    Ok(())
}

/// Expenses dated in `[from, to)`, newest first
pub async fn list_expenses(pool: &SqlitePool, from: i64, to: i64) -> CoreResult<Vec<Expense>> {
    if from > to {
        return Err(CoreError::validation(format!("from ({from}) is after to ({to})")));
    }
    Ok(expense_repo::find_between(pool, from, to).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_pool;

    fn create(title: &str, amount: f64) -> ExpenseCreate {
        ExpenseCreate {
            title: title.into(),
            amount,
            category: None,
            date: None,
        }
    }

    #[tokio::test]
    async fn test_add_defaults() {
        let pool = test_pool().await;
        let expense = add_expense(&pool, create(" Milk ", 120.0), 5_000).await.unwrap();
        assert_eq!(expense.title, "Milk");
        assert_eq!(expense.category, "Inventory");
        assert_eq!(expense.date, 5_000);

        let listed = list_expenses(&pool, 0, 10_000).await.unwrap();
        assert_eq!(listed, vec![expense]);
    }

    #[tokio::test]
    async fn test_add_validation() {
        let pool = test_pool().await;
        for input in [create("", 10.0), create("Rent", -1.0), create("Rent", f64::INFINITY)] {
            let err = add_expense(&pool, input, 0).await.unwrap_err();
            assert!(matches!(err, CoreError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let expense = add_expense(&pool, create("Gas", 900.0), 1).await.unwrap();
        delete_expense(&pool, expense.id).await.unwrap();
        let err = delete_expense(&pool, expense.id).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound { entity: Entity::Expense, .. }));
    }
}

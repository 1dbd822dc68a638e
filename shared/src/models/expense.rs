//! Expense Model

use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPENSE_CATEGORY: &str = "Inventory";

/// Expense entity (支出)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Expense {
    pub id: i64,
    pub title: String,
    /// Amount in currency unit
    pub amount: f64,
    pub category: String,
    /// When the expense was incurred (millis)
    pub date: i64,
    pub created_at: i64,
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub title: String,
    pub amount: f64,
    pub category: Option<String>,
    pub date: Option<i64>,
}

/// Expense listing range (`?from=&to=`, millis, `to` exclusive)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseQuery {
    pub from: Option<i64>,
    pub to: Option<i64>,
}

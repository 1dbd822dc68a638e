//! Sales report model

use super::expense::Expense;
use super::order::Order;
use serde::{Deserialize, Serialize};

/// Revenue/expense summary; only paid orders count as revenue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesReport {
    pub today_revenue: f64,
    pub today_orders: i64,
    pub month_revenue: f64,
    pub month_expenses: f64,
    /// `month_revenue - month_expenses`
    pub net_profit: f64,
    /// This month's expenses, newest first
    pub expenses: Vec<Expense>,
    /// Most recent paid orders, newest first
    pub recent_sales: Vec<Order>,
}

//! Reporting Aggregator
//!
//! Read-only sums over paid orders and expenses. Day and month boundaries are UTC.

use shared::models::SalesReport;
use shared::util::{HOUR_MILLIS, day_start_millis, month_start_millis};
use sqlx::SqlitePool;

use crate::core::CoreResult;
use crate::db::repository::{expense as expense_repo, order as order_repo};
use crate::orders::money;

/// How many recent paid orders the report lists
pub const RECENT_SALES_LIMIT: i64 = 20;

pub async fn report(pool: &SqlitePool, now: i64) -> CoreResult<SalesReport> {
    let day_start = day_start_millis(now);
    let day_end = day_start + 24 * HOUR_MILLIS;
    let month_start = month_start_millis(now);

    let mut conn = pool.acquire().await?;
    let (today_revenue, today_orders) =
        order_repo::paid_totals_between(&mut *conn, day_start, day_end).await?;
    let (month_revenue, _) =
        order_repo::paid_totals_between(&mut *conn, month_start, i64::MAX).await?;
    let month_expenses = expense_repo::sum_between(&mut *conn, month_start, i64::MAX).await?;
    let expenses = expense_repo::find_between(&mut *conn, month_start, i64::MAX).await?;
    let recent_sales = order_repo::recent_paid(&mut conn, RECENT_SALES_LIMIT).await?;

    let round = |v: f64| money::to_f64(money::to_decimal(v));
    let net_profit = money::to_f64(money::to_decimal(month_revenue) - money::to_decimal(month_expenses));

    Ok(SalesReport {
        today_revenue: round(today_revenue),
        today_orders,
        month_revenue: round(month_revenue),
        month_expenses: round(month_expenses),
        net_profit,
        expenses,
        recent_sales,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::test_pool;
    use crate::{expenses, menu, orders, payments, tables};
    use chrono::{TimeZone, Utc};
    use shared::models::{ExpenseCreate, OrderCreate, OrderItem, PaymentMethod};

    fn at(day: u32, hour: u32) -> i64 {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    async fn order(pool: &SqlitePool, name: &str, price: f64, quantity: i64, now: i64) -> i64 {
        orders::create_order(
            pool,
            OrderCreate {
                table_no: 1,
                items: vec![OrderItem {
                    name: name.into(),
                    price,
                    quantity,
                }],
                payment_method: PaymentMethod::Cash,
                note: None,
                user_id: None,
            },
            now,
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_report_counts_only_paid() {
        let pool = test_pool().await;
        tables::seed_tables(&pool, 1, 0).await.unwrap();
        menu::seed_menu(&pool, 0).await.unwrap();
        let now = at(14, 18);

        let earlier = order(&pool, "Bournvita", 50.0, 2, at(2, 12)).await;
        let today = order(&pool, "Veg Cheese Pizza", 109.0, 2, at(14, 9)).await;
        let _unpaid = order(&pool, "Party Combo", 399.0, 1, at(14, 10)).await;
        let last_month = order(&pool, "Plain Fries", 59.0, 1, at(1, 0) - 1).await;
        for id in [earlier, today, last_month] {
            payments::submit_reference(&pool, id, "123456789012", now).await.unwrap();
        }

        expenses::add_expense(
            &pool,
            ExpenseCreate {
                title: "Vegetables".into(),
                amount: 80.25,
                category: None,
                date: Some(at(10, 8)),
            },
            now,
        )
        .await
        .unwrap();

        let report = report(&pool, now).await.unwrap();
        assert_eq!(report.today_revenue, 218.0);
        assert_eq!(report.today_orders, 1);
        assert_eq!(report.month_revenue, 318.0);
        assert_eq!(report.month_expenses, 80.25);
        assert_eq!(report.net_profit, 237.75);
        assert_eq!(report.expenses.len(), 1);
        assert_eq!(
            report.recent_sales.iter().map(|o| o.id).collect::<Vec<_>>(),
            vec![today, earlier, last_month]
        );
    }

    #[tokio::test]
    async fn test_empty_report() {
        let pool = test_pool().await;
        let report = report(&pool, at(14, 18)).await.unwrap();
        assert_eq!(report.today_revenue, 0.0);
        assert_eq!(report.net_profit, 0.0);
        assert!(report.recent_sales.is_empty());
    }
}

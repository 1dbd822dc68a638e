//! Order Repository

use super::{RepoError, RepoResult};
use shared::models::{Order, OrderFilter, OrderItem, OrderStatus, PaymentStatus};
use sqlx::{Executor, Sqlite, SqliteConnection};

const ORDER_COLUMNS: &str = "o.id, o.user_id, u.name AS customer_name, u.phone AS customer_phone, \
     o.table_no, o.total_amount, o.status, o.payment_method, o.payment_status, o.payment_reference, \
     o.paid_at, o.note, o.version, o.created_at, o.updated_at";

/// Orders with their customer's name and phone
const ORDER_SOURCE: &str = "orders o LEFT JOIN app_user u ON u.id = o.user_id";

/// Insert an order row together with its line items.
pub async fn insert(conn: &mut SqliteConnection, order: &Order) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO orders (id, user_id, table_no, total_amount, status, payment_method, \
         payment_status, payment_reference, paid_at, note, version, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(order.id)
    .bind(order.user_id)
    .bind(order.table_no)
    .bind(order.total_amount)
    .bind(order.status)
    .bind(order.payment_method)
    .bind(order.payment_status)
    .bind(&order.payment_reference)
    .bind(order.paid_at)
    .bind(&order.note)
    .bind(order.version)
    .bind(order.created_at)
    .bind(order.updated_at)
    .execute(&mut *conn)
    .await?;

    for (position, item) in order.items.iter().enumerate() {
        sqlx::query(
            "INSERT INTO order_item (order_id, position, name, price, quantity) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(order.id)
        .bind(position as i64)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.quantity)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

pub async fn find_items<'e, E>(executor: E, order_id: i64) -> RepoResult<Vec<OrderItem>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT name, price, quantity FROM order_item WHERE order_id = ? ORDER BY position",
    )
    .bind(order_id)
    .fetch_all(executor)
    .await?;
    Ok(items)
}

/// Order with its line items
pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("SELECT {ORDER_COLUMNS} FROM {ORDER_SOURCE} WHERE o.id = ?");
    let Some(mut order) = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
    else {
        return Ok(None);
    };
    order.items = find_items(&mut *conn, id).await?;
    Ok(Some(order))
}

/// Orders newest first, optionally restricted to active ones and to one customer.
pub async fn list(
    conn: &mut SqliteConnection,
    filter: OrderFilter,
    user_id: Option<i64>,
) -> RepoResult<Vec<Order>> {
    let active_only = filter == OrderFilter::Active;
    let sql = format!(
        "SELECT {ORDER_COLUMNS} FROM {ORDER_SOURCE} \
         WHERE (?1 IS NULL OR o.user_id = ?1) \
           AND (?2 = 0 OR o.status NOT IN ('completed', 'cancelled')) \
         ORDER BY o.created_at DESC, o.id DESC"
    );
    let orders = sqlx::query_as::<_, Order>(&sql)
        .bind(user_id)
        .bind(active_only)
        .fetch_all(&mut *conn)
        .await?;
    with_items(conn, orders).await
}

/// Most recent paid orders
pub async fn recent_paid(conn: &mut SqliteConnection, limit: i64) -> RepoResult<Vec<Order>> {
    let sql = format!(
        "SELECT {ORDER_COLUMNS} FROM {ORDER_SOURCE} WHERE o.payment_status = 'paid' \
         ORDER BY o.created_at DESC, o.id DESC LIMIT ?"
    );
    let orders = sqlx::query_as::<_, Order>(&sql)
        .bind(limit)
        .fetch_all(&mut *conn)
        .await?;
    with_items(conn, orders).await
}

async fn with_items(conn: &mut SqliteConnection, mut orders: Vec<Order>) -> RepoResult<Vec<Order>> {
    for order in &mut orders {
        order.items = find_items(&mut *conn, order.id).await?;
    }
    Ok(orders)
}

/// Revenue and order count of paid orders created in `[from, to)`
pub async fn paid_totals_between<'e, E>(executor: E, from: i64, to: i64) -> RepoResult<(f64, i64)>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, (f64, i64)>(
        "SELECT COALESCE(SUM(total_amount), 0.0), COUNT(*) FROM orders \
         WHERE payment_status = 'paid' AND created_at >= ? AND created_at < ?",
    )
    .bind(from)
    .bind(to)
    .fetch_one(executor)
    .await?;
    Ok(row)
}

pub async fn update_status<'e, E>(executor: E, id: i64, status: OrderStatus, now: i64) -> RepoResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        "UPDATE orders SET status = ?, version = version + 1, updated_at = ? WHERE id = ?",
    )
    .bind(status)
    .bind(now)
    .bind(id)
    .execute(executor)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    Ok(())
}

pub async fn update_payment<'e, E>(
    executor: E,
    id: i64,
    status: PaymentStatus,
    reference: Option<&str>,
    paid_at: Option<i64>,
    now: i64,
) -> RepoResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        "UPDATE orders SET payment_status = ?, payment_reference = ?, paid_at = ?, \
         version = version + 1, updated_at = ? WHERE id = ?",
    )
    .bind(status)
    .bind(reference)
    .bind(paid_at)
    .bind(now)
    .bind(id)
    .execute(executor)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{dining_table, testing::test_pool, user};
    use shared::models::PaymentMethod;

    fn order(id: i64, table_no: i64, created_at: i64) -> Order {
        Order {
            id,
            user_id: None,
            customer_name: None,
            customer_phone: None,
            table_no,
            items: vec![
                OrderItem {
                    name: "Tea".into(),
                    price: 20.0,
                    quantity: 2,
                },
                OrderItem {
                    name: "Samosa".into(),
                    price: 15.0,
                    quantity: 1,
                },
            ],
            total_amount: 55.0,
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Pending,
            payment_reference: None,
            paid_at: None,
            note: Some("less sugar".into()),
            version: 0,
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_keeps_item_order() {
        let pool = test_pool().await;
        dining_table::insert_if_missing(&pool, 3, 0).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        insert(&mut conn, &order(42, 3, 1_000)).await.unwrap();
        let found = find_by_id(&mut conn, 42).await.unwrap().unwrap();

        assert_eq!(found, order(42, 3, 1_000));
        assert!(find_by_id(&mut conn, 43).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_active_excludes_terminal() {
        let pool = test_pool().await;
        dining_table::insert_if_missing(&pool, 1, 0).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        insert(&mut conn, &order(1, 1, 100)).await.unwrap();
        insert(&mut conn, &order(2, 1, 200)).await.unwrap();
        update_status(&mut *conn, 1, OrderStatus::Cancelled, 300)
            .await
            .unwrap();

        let active = list(&mut conn, OrderFilter::Active, None).await.unwrap();
        assert_eq!(active.iter().map(|o| o.id).collect::<Vec<_>>(), vec![2]);

        let all = list(&mut conn, OrderFilter::All, None).await.unwrap();
        assert_eq!(all.iter().map(|o| o.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(all[1].version, 1);
    }

    #[tokio::test]
    async fn test_paid_totals_only_count_paid() {
        let pool = test_pool().await;
        dining_table::insert_if_missing(&pool, 1, 0).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        insert(&mut conn, &order(1, 1, 100)).await.unwrap();
        insert(&mut conn, &order(2, 1, 200)).await.unwrap();
        update_payment(&mut *conn, 2, PaymentStatus::Paid, Some("123456789012"), Some(250), 250)
            .await
            .unwrap();

        let (revenue, count) = paid_totals_between(&mut *conn, 0, 1_000).await.unwrap();
        assert_eq!(revenue, 55.0);
        assert_eq!(count, 1);

        let (revenue, count) = paid_totals_between(&mut *conn, 0, 200).await.unwrap();
        assert_eq!(revenue, 0.0);
        assert_eq!(count, 0);

        let recent = recent_paid(&mut conn, 20).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].payment_reference.as_deref(), Some("123456789012"));
    }

    #[tokio::test]
    async fn test_recent_paid_joins_customer() {
        let pool = test_pool().await;
        dining_table::insert_if_missing(&pool, 1, 0).await.unwrap();
        user::upsert_by_phone(&pool, 5, "9123456780", Some("Kabir"), 0)
            .await
            .unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let mut known = order(1, 1, 100);
        known.user_id = Some(5);
        insert(&mut conn, &known).await.unwrap();
        insert(&mut conn, &order(2, 1, 200)).await.unwrap();
        for id in [1, 2] {
            update_payment(&mut *conn, id, PaymentStatus::Paid, None, Some(300), 300)
                .await
                .unwrap();
        }

        let recent = recent_paid(&mut conn, 20).await.unwrap();
        assert_eq!(recent[0].customer_name, None);
        assert_eq!(recent[1].customer_name.as_deref(), Some("Kabir"));
        assert_eq!(recent[1].customer_phone.as_deref(), Some("9123456780"));
    }

    #[tokio::test]
    async fn test_updates_on_missing_order() {
        let pool = test_pool().await;
        let err = update_status(&pool, 7, OrderStatus::Preparing, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}

//! Order Lifecycle
//!
//! - **lifecycle**: pure status and payment-gate rules
//! - **money**: item validation and decimal totals
//!
//! Every mutation reads, checks and writes inside one SQLite transaction and
//! bumps the order's `version`. Callers may pin `expected_version` to reject
//! stale writes; without it the last write wins.

pub mod lifecycle;
pub mod money;

use shared::models::{Order, OrderCreate, OrderQuery, OrderStatus, PaymentStatus};
use shared::util::snowflake_id;
use sqlx::{SqliteConnection, SqlitePool};

use crate::core::{CoreError, CoreResult, Entity, check_version};
use crate::db;
use crate::db::repository::{dining_table, order as order_repo, user as user_repo};
use crate::menu;
use crate::tables;
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, normalize_optional, validate_optional_text,
};

/// Checkout: validate against the menu, compute the total, store the order and
/// occupy its table in one transaction.
pub async fn create_order(pool: &SqlitePool, input: OrderCreate, now: i64) -> CoreResult<Order> {
    if input.table_no <= 0 {
        return Err(CoreError::validation(format!(
            "table_no must be positive, got {}",
            input.table_no
        )));
    }
    money::validate_items(&input.items)?;
    let note = normalize_optional(input.note);
    validate_optional_text(&note, "note", MAX_NOTE_LEN)?;

    let items: Vec<_> = input
        .items
        .into_iter()
        .map(|mut item| {
            item.name = item.name.trim().to_string();
            item
        })
        .collect();

    let mut tx = db::begin_immediate(pool).await?;

    let customer = match input.user_id {
        Some(user_id) => Some(
            user_repo::find_by_id(&mut *tx, user_id)
                .await?
                .ok_or_else(|| CoreError::validation(format!("Unknown user {user_id}")))?,
        ),
        None => None,
    };
    if dining_table::find_by_no(&mut *tx, input.table_no).await?.is_none() {
        return Err(CoreError::validation(format!("Unknown table {}", input.table_no)));
    }
    menu::check_items(&mut tx, &items).await?;

    let payment_status = lifecycle::initial_payment_status(input.payment_method);
    let order = Order {
        id: snowflake_id(),
        user_id: input.user_id,
        customer_name: customer.as_ref().and_then(|u| u.name.clone()),
        customer_phone: customer.map(|u| u.phone),
        table_no: input.table_no,
        total_amount: money::order_total(&items),
        items,
        status: OrderStatus::Pending,
        payment_method: input.payment_method,
        payment_status,
        payment_reference: None,
        paid_at: (payment_status == PaymentStatus::Paid).then_some(now),
        note,
        version: 0,
        created_at: now,
        updated_at: now,
    };
    order_repo::insert(&mut tx, &order).await?;
    tables::occupy_in(&mut tx, order.table_no, now).await?;
    tx.commit().await?;

    tracing::info!(
        order_id = order.id,
        table_no = order.table_no,
        total = order.total_amount,
        payment_method = %order.payment_method,
        "Order created"
    );
    Ok(order)
}

pub async fn get_order(pool: &SqlitePool, id: i64) -> CoreResult<Order> {
    let mut conn = pool.acquire().await?;
    load(&mut conn, id).await
}

/// Orders newest first; `active` hides completed and cancelled ones.
pub async fn list_orders(pool: &SqlitePool, query: &OrderQuery) -> CoreResult<Vec<Order>> {
    let mut conn = pool.acquire().await?;
    Ok(order_repo::list(&mut conn, query.status, query.user_id).await?)
}

/// Move an order one step forward. Completion is blocked until paid.
pub async fn advance_status(
    pool: &SqlitePool,
    id: i64,
    to: OrderStatus,
    expected_version: Option<i64>,
    now: i64,
) -> CoreResult<Order> {
    let mut tx = db::begin_immediate(pool).await?;
    let mut order = load(&mut tx, id).await?;
    check_version(expected_version, order.version)?;
    lifecycle::check_advance(&order, to)?;

    order_repo::update_status(&mut *tx, id, to, now).await?;
    tx.commit().await?;

    let from = order.status;
    apply_write(&mut order, now);
    order.status = to;
    tracing::info!(order_id = id, table_no = order.table_no, %from, %to, "Order status advanced");
    Ok(order)
}

/// Cancel a pending or preparing order.
pub async fn cancel(
    pool: &SqlitePool,
    id: i64,
    expected_version: Option<i64>,
    now: i64,
) -> CoreResult<Order> {
    let mut tx = db::begin_immediate(pool).await?;
    let mut order = load(&mut tx, id).await?;
    check_version(expected_version, order.version)?;
    lifecycle::check_cancel(&order)?;

    order_repo::update_status(&mut *tx, id, OrderStatus::Cancelled, now).await?;
    tx.commit().await?;

    let from = order.status;
    apply_write(&mut order, now);
    order.status = OrderStatus::Cancelled;
    tracing::info!(order_id = id, table_no = order.table_no, %from, "Order cancelled");
    Ok(order)
}

/// Set the payment status from any order status.
///
/// `paid` stores `reference` when given (keeping an earlier one otherwise) and
/// stamps `paid_at` once; any other status clears both.
pub async fn mark_payment_status(
    pool: &SqlitePool,
    id: i64,
    status: PaymentStatus,
    reference: Option<String>,
    expected_version: Option<i64>,
    now: i64,
) -> CoreResult<Order> {
    let reference = normalize_optional(reference);
    validate_optional_text(&reference, "reference", MAX_SHORT_TEXT_LEN)?;

    let mut tx = db::begin_immediate(pool).await?;
    let mut order = load(&mut tx, id).await?;
    check_version(expected_version, order.version)?;
    lifecycle::check_payment_change(&order, status)?;

    let (reference, paid_at) = match status {
        PaymentStatus::Paid => (
            reference.or(order.payment_reference.take()),
            order.paid_at.or(Some(now)),
        ),
        PaymentStatus::Pending | PaymentStatus::Failed => (None, None),
    };
    order_repo::update_payment(&mut *tx, id, status, reference.as_deref(), paid_at, now).await?;
    tx.commit().await?;

    let from = order.payment_status;
    apply_write(&mut order, now);
    order.payment_status = status;
    order.payment_reference = reference;
    order.paid_at = paid_at;
    tracing::info!(
        order_id = id,
        table_no = order.table_no,
        from = %from,
        to = %status,
        "Order payment status changed"
    );
    Ok(order)
}

async fn load(conn: &mut SqliteConnection, id: i64) -> CoreResult<Order> {
    order_repo::find_by_id(conn, id)
        .await?
        .ok_or(CoreError::not_found(Entity::Order, id))
}

/// Mirror the repository's `version + 1, updated_at = now`
fn apply_write(order: &mut Order, now: i64) {
    order.version += 1;
    order.updated_at = now;
}

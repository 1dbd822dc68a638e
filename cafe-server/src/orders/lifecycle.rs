//! Order status rules
//!
//! ```text
//! pending -> preparing -> served -> completed
//!    \           \
//!     +-----------+----> cancelled
//! ```
//!
//! `served -> completed` additionally requires the order to be paid.

use shared::models::{Order, OrderStatus, PaymentMethod, PaymentStatus};

use crate::core::{CoreError, CoreResult};

/// The only status an order may advance to from `status`
pub fn next_status(status: OrderStatus) -> Option<OrderStatus> {
    match status {
        OrderStatus::Pending => Some(OrderStatus::Preparing),
        OrderStatus::Preparing => Some(OrderStatus::Served),
        OrderStatus::Served => Some(OrderStatus::Completed),
        OrderStatus::Completed | OrderStatus::Cancelled => None,
    }
}

pub fn check_advance(order: &Order, to: OrderStatus) -> CoreResult<()> {
    if next_status(order.status) != Some(to) {
        return Err(CoreError::InvalidTransition {
            from: order.status,
            to,
        });
    }
    if to == OrderStatus::Completed && !order.is_paid() {
        return Err(CoreError::PaymentRequired { order_id: order.id });
    }
    Ok(())
}

pub fn can_cancel(status: OrderStatus) -> bool {
    matches!(status, OrderStatus::Pending | OrderStatus::Preparing)
}

pub fn check_cancel(order: &Order) -> CoreResult<()> {
    if can_cancel(order.status) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            from: order.status,
            to: OrderStatus::Cancelled,
        })
    }
}

/// Payment status at checkout: cash is collected at the counter later, online
/// orders are placed after the payer has already paid.
pub fn initial_payment_status(method: PaymentMethod) -> PaymentStatus {
    match method {
        PaymentMethod::Cash => PaymentStatus::Pending,
        PaymentMethod::Online => PaymentStatus::Paid,
    }
}

/// A completed order must stay paid
pub fn check_payment_change(order: &Order, to: PaymentStatus) -> CoreResult<()> {
    if order.status == OrderStatus::Completed && to != PaymentStatus::Paid {
        return Err(CoreError::validation(format!(
            "Order {} is completed, its payment cannot become {to}",
            order.id
        )));
    }
    Ok(())
}

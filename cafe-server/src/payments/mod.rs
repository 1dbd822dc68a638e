//! Payment Reconciliation
//!
//! Payers transfer money over UPI and type the bank's UTR into the pay screen.
//! The reference is format-checked only; nothing here talks to a bank.

use shared::error::ErrorCode;
use shared::models::{Order, PaymentStatus, PaymentView};
use sqlx::SqlitePool;

use crate::core::{CoreError, CoreResult, MerchantConfig};
use crate::orders;

/// Shortest accepted UTR
pub const UTR_MIN_LEN: usize = 12;
/// Longest accepted UTR
pub const UTR_MAX_LEN: usize = 18;

/// Trim and check a UTR: ASCII digits only, 12 to 18 of them.
pub fn validate_utr(reference: &str) -> CoreResult<&str> {
    let utr = reference.trim();
    if utr.is_empty() || !utr.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::validation_with(
            ErrorCode::PaymentInvalidReference,
            "Payment reference must contain digits only",
        ));
    }
    if !(UTR_MIN_LEN..=UTR_MAX_LEN).contains(&utr.len()) {
        return Err(CoreError::validation_with(
            ErrorCode::PaymentInvalidReference,
            format!(
                "Payment reference must be {UTR_MIN_LEN}-{UTR_MAX_LEN} digits, got {}",
                utr.len()
            ),
        ));
    }
    Ok(utr)
}

/// `upi://pay` deep link for the order's amount, rendered as a QR code
pub fn upi_link(merchant: &MerchantConfig, order: &Order) -> String {
    format!(
        "upi://pay?pa={}&pn={}&mc={}&tr={}&am={:.2}&cu=INR&mode=01",
        urlencoding::encode(&merchant.upi_id),
        urlencoding::encode(&merchant.name),
        urlencoding::encode(&merchant.code),
        order.id,
        order.total_amount,
    )
}

pub async fn get_payment_view(
    pool: &SqlitePool,
    merchant: &MerchantConfig,
    order_id: i64,
) -> CoreResult<PaymentView> {
    let order = orders::get_order(pool, order_id).await?;
    Ok(PaymentView {
        order_id: order.id,
        table_no: order.table_no,
        total_amount: order.total_amount,
        payment_status: order.payment_status,
        upi_link: upi_link(merchant, &order),
    })
}

/// Record a payer-submitted UTR and mark the order paid.
///
/// Resubmitting on a paid order overwrites the reference and succeeds.
pub async fn submit_reference(
    pool: &SqlitePool,
    order_id: i64,
    reference: &str,
    now: i64,
) -> CoreResult<Order> {
    let utr = validate_utr(reference)?;
    let order = orders::mark_payment_status(
        pool,
        order_id,
        PaymentStatus::Paid,
        Some(utr.to_string()),
        None,
        now,
    )
    .await?;
    tracing::info!(order_id, table_no = order.table_no, "Payment reference recorded");
    Ok(order)
}

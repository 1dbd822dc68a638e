//! Payment screen and UTR submission types

use super::order::PaymentStatus;
use serde::{Deserialize, Serialize};

/// Data needed to render the pay screen for one order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentView {
    pub order_id: i64,
    pub table_no: i64,
    pub total_amount: f64,
    pub payment_status: PaymentStatus,
    /// `upi://pay?...` deep link for QR rendering
    pub upi_link: String,
}

/// Payer-submitted bank transfer reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSubmit {
    pub utr: String,
}

//! Order Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kitchen-facing order status
///
/// Forward path: `pending -> preparing -> served -> completed`.
/// `cancelled` is reachable from `pending` and `preparing` only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Served,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Served => "served",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Completed and cancelled orders are inert
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the customer intends to pay, fixed at creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum PaymentMethod {
    #[default]
    Cash,
    Online,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Online => "online",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line item (snapshot of the cart entry at checkout)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub name: String,
    /// Unit price in currency unit
    pub price: f64,
    #[serde(alias = "qty")]
    pub quantity: i64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    /// Customer who placed the order, if known
    pub user_id: Option<i64>,
    /// Joined from the customer's user record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub table_no: i64,
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Sum of price x quantity, computed server-side
    pub total_amount: f64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    /// External payment reference (UTR), present only while paid
    pub payment_reference: Option<String>,
    pub paid_at: Option<i64>,
    pub note: Option<String>,
    pub version: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Order {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}

/// Create order payload (checkout)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_no: i64,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
    pub user_id: Option<i64>,
}

/// Advance order status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
    #[serde(default)]
    pub expected_version: Option<i64>,
}

/// Mark payment status payload (staff)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusUpdate {
    pub status: PaymentStatus,
    pub reference: Option<String>,
    #[serde(default)]
    pub expected_version: Option<i64>,
}

/// Which orders a listing returns
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderFilter {
    /// Everything not yet completed or cancelled
    Active,
    #[default]
    All,
}

/// Order listing query (`?status=active&user_id=...`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderQuery {
    #[serde(default)]
    pub status: OrderFilter,
    pub user_id: Option<i64>,
}

/// Optimistic concurrency token passed as a query parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionQuery {
    pub expected_version: Option<i64>,
}

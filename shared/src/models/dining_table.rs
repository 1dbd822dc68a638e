//! Dining Table Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy state of a physical table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dining table entity (桌台)
///
/// `occupied_at` is set exactly when `status` is [`TableStatus::Occupied`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub table_no: i64,
    pub status: TableStatus,
    pub occupied_at: Option<i64>,
    pub version: i64,
    pub updated_at: i64,
}

impl DiningTable {
    pub fn is_occupied(&self) -> bool {
        self.status == TableStatus::Occupied
    }

    /// Whether an occupied table has outlived `threshold_millis` at `now`.
    ///
    /// Strictly greater: a table checked exactly at the threshold stays occupied.
    pub fn is_stale(&self, now: i64, threshold_millis: i64) -> bool {
        match (self.status, self.occupied_at) {
            (TableStatus::Occupied, Some(at)) => now - at > threshold_millis,
            // Occupied without a timestamp breaks the invariant, reclaim it
            (TableStatus::Occupied, None) => true,
            (TableStatus::Available, _) => false,
        }
    }
}

/// Manual occupancy override payload (staff)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    /// `true` occupies the table, `false` frees it
    pub occupy: bool,
    /// Caller must confirm the override explicitly
    #[serde(default)]
    pub confirm: bool,
    #[serde(default)]
    pub expected_version: Option<i64>,
}

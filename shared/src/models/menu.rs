//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu item entity (菜单项)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    pub category: String,
    pub description: String,
    /// Image path served by the frontend
    pub image: String,
    pub is_available: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Toggle availability payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuAvailabilityUpdate {
    pub is_available: bool,
}

/// Menu listing filter (`?available=true` hides sold-out items)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuQuery {
    pub available: Option<bool>,
}

/// New menu item (seed data and staff additions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

//! User Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// Customer or staff account, keyed by phone number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub phone: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub is_verified: bool,
    pub created_at: i64,
}

/// Register-or-refresh payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpsert {
    pub phone: String,
    pub name: Option<String>,
}

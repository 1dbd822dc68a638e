//! Menu Catalog
//!
//! Items are looked up by exact name. Checkout lines must name an available
//! item at its current price; staff toggle availability when something sells
//! out.

mod defaults;

pub use defaults::default_menu;

use shared::error::ErrorCode;
use shared::models::{MenuItem, MenuQuery, OrderItem};
use sqlx::{SqliteConnection, SqlitePool};

use crate::core::{CoreError, CoreResult, Entity};
use crate::db;
use crate::db::repository::menu_item;
use crate::orders::money;

/// Insert the default menu when the menu is empty.
///
/// Returns how many items were inserted (0 when already seeded).
pub async fn seed_menu(pool: &SqlitePool, now: i64) -> CoreResult<u64> {
    if menu_item::count(pool).await? > 0 {
        return Ok(0);
    }

    let mut tx = db::begin_immediate(pool).await?;
    let mut inserted = 0;
    for item in default_menu() {
        if menu_item::insert_if_missing(&mut *tx, &item, now).await? {
            inserted += 1;
        }
    }
    tx.commit().await?;
    Ok(inserted)
}

/// Menu sorted by category then name
pub async fn list_menu(pool: &SqlitePool, query: &MenuQuery) -> CoreResult<Vec<MenuItem>> {
    let available_only = query.available.unwrap_or(false);
    Ok(menu_item::find_all(pool, available_only).await?)
}

pub async fn set_availability(
    pool: &SqlitePool,
    id: i64,
    is_available: bool,
    now: i64,
) -> CoreResult<MenuItem> {
    let item = menu_item::set_available(pool, id, is_available, now)
        .await?
        .ok_or(CoreError::not_found(Entity::MenuItem, id))?;
    tracing::info!(menu_item_id = id, name = %item.name, is_available, "Menu availability changed");
    Ok(item)
}

/// Every line must name an available menu item at its listed price.
pub(crate) async fn check_items(conn: &mut SqliteConnection, items: &[OrderItem]) -> CoreResult<()> {
    for (index, line) in items.iter().enumerate() {
        let Some(item) = menu_item::find_by_name(&mut *conn, &line.name).await? else {
            return Err(line_error(index, format!("{:?} is not on the menu", line.name)));
        };
        if !item.is_available {
            return Err(line_error(index, format!("{} is currently unavailable", item.name)));
        }
        if money::to_decimal(line.price) != money::to_decimal(item.price) {
            return Err(line_error(
                index,
                format!("{} costs {}, got {}", item.name, item.price, line.price),
            ));
        }
    }
    Ok(())
}

fn line_error(index: usize, message: String) -> CoreError {
    CoreError::validation_with(ErrorCode::OrderItemInvalid, format!("items[{index}]: {message}"))
}

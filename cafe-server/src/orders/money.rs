//! Money calculation utilities using rust_decimal for precision
//!
//! Totals are summed as `Decimal` and converted to `f64` (2 dp, half-up)
//! for storage/serialization.

use rust_decimal::prelude::*;
use shared::error::ErrorCode;
use shared::models::OrderItem;

use crate::core::{CoreError, CoreResult};
use crate::utils::validation::MAX_NAME_LEN;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: i64 = 9999;
/// Maximum number of lines per order
const MAX_ITEMS: usize = 200;

fn item_error(index: usize, message: String) -> CoreError {
    CoreError::validation_with(ErrorCode::OrderItemInvalid, format!("items[{index}]: {message}"))
}

/// Validate checkout line items: non-empty, positive quantities, sane prices.
pub fn validate_items(items: &[OrderItem]) -> CoreResult<()> {
    if items.is_empty() {
        return Err(CoreError::validation_with(
            ErrorCode::OrderEmpty,
            "Order must contain at least one item",
        ));
    }
    if items.len() > MAX_ITEMS {
        return Err(CoreError::validation_with(
            ErrorCode::OrderItemInvalid,
            format!("Order has too many items ({}, max {MAX_ITEMS})", items.len()),
        ));
    }

    for (index, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(item_error(index, "name must not be empty".into()));
        }
        if item.name.len() > MAX_NAME_LEN {
            return Err(item_error(index, format!("name is too long (max {MAX_NAME_LEN})")));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(item_error(
                index,
                format!("price must be a non-negative number, got {}", item.price),
            ));
        }
        if item.price > MAX_PRICE {
            return Err(item_error(
                index,
                format!("price exceeds maximum allowed ({MAX_PRICE}), got {}", item.price),
            ));
        }
        if item.quantity <= 0 {
            return Err(item_error(
                index,
                format!("quantity must be positive, got {}", item.quantity),
            ));
        }
        if item.quantity > MAX_QUANTITY {
            return Err(item_error(
                index,
                format!("quantity exceeds maximum allowed ({MAX_QUANTITY}), got {}", item.quantity),
            ));
        }
    }
    Ok(())
}

pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Sum of price x quantity over all lines
pub fn order_total(items: &[OrderItem]) -> f64 {
    let total: Decimal = items
        .iter()
        .map(|item| to_decimal(item.price) * Decimal::from(item.quantity))
        .sum();
    to_f64(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, quantity: i64) -> OrderItem {
        OrderItem {
            name: name.into(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_tea_total() {
        assert_eq!(order_total(&[item("Tea", 20.0, 2)]), 40.0);
    }

    #[test]
    fn test_accumulation_precision() {
        // 0.1 * 3 in f64 is 0.30000000000000004
        let items: Vec<_> = (0..3).map(|_| item("Mint", 0.1, 1)).collect();
        assert_eq!(order_total(&items), 0.3);
        assert_eq!(
            order_total(&[item("Latte", 149.99, 3), item("Cookie", 0.005, 1)]),
            449.98
        );
    }

    #[test]
    fn test_validate_items() {
        assert!(validate_items(&[item("Tea", 0.0, 1)]).is_ok());

        let cases = [
            (vec![], ErrorCode::OrderEmpty),
            (vec![item("Tea", 20.0, 0)], ErrorCode::OrderItemInvalid),
            (vec![item("Tea", -1.0, 1)], ErrorCode::OrderItemInvalid),
            (vec![item("Tea", f64::NAN, 1)], ErrorCode::OrderItemInvalid),
            (vec![item("  ", 5.0, 1)], ErrorCode::OrderItemInvalid),
            (vec![item("Tea", 5.0, 10_000)], ErrorCode::OrderItemInvalid),
        ];
        for (items, expected) in cases {
            match validate_items(&items) {
                Err(CoreError::Validation { code, .. }) => assert_eq!(code, expected),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_nan_becomes_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    }
}

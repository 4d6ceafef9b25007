//! # Validation Module
//!
//! Input checks shared by `CartItem` and `ShoppingCart`.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_item("SKU-1", "  Widget ", 10.005, 2)                              │
//! │       │                                                                 │
//! │       ├── validate_product_id("SKU-1")     → Ok                         │
//! │       ├── validate_product_name("  Widget ") → Ok("Widget")            │
//! │       ├── validate_price(10.005)           → Ok($10.01)                 │
//! │       ├── validate_quantity(2)             → Ok                         │
//! │       │                                                                 │
//! │       └── All OK → item is built and inserted                           │
//! │                                                                         │
//! │  Any failure returns before the cart is touched.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::validation::{validate_product_id, validate_quantity};
//!
//! assert!(validate_product_id("SKU-1").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_CART_AMOUNT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound of a discount percentage.
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;

// =============================================================================
// String Validators
// =============================================================================

fn validate_identifier(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Validates a product identifier.
///
/// ## Rules
/// - Must not be empty (whitespace counts as content)
/// - Stored exactly as given (no trimming), since it is a lookup key
pub fn validate_product_id(product_id: &str) -> ValidationResult<()> {
    validate_identifier("product_id", product_id)
}

/// Validates a user identifier (same rules as product ids).
pub fn validate_user_id(user_id: &str) -> ValidationResult<()> {
    validate_identifier("user_id", user_id)
}

/// Validates a product name and returns it trimmed.
///
/// ```rust
/// use cart_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name("  Widget ").unwrap(), "Widget");
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }
    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price and converts it to cents.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for free items)
/// - Rounded to 2 fractional digits, midpoints away from zero
/// - Must fit in `i64` cents
///
/// ```rust
/// use cart_core::validation::validate_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(validate_price(Decimal::new(10005, 3)).unwrap().cents(), 1001);
/// assert!(validate_price(Decimal::new(-1, 2)).is_err());
/// ```
pub fn validate_price(price: Decimal) -> ValidationResult<Money> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::negative("price"));
    }

    Money::from_decimal(price).ok_or_else(|| ValidationError::out_of_range("price", 0, i64::MAX))
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::must_be_positive("quantity"));
    }
    Ok(())
}

/// Validates that `unit_price × qty` fits within [`MAX_CART_AMOUNT`] and
/// returns the line total.
///
/// ```rust
/// use cart_core::money::Money;
/// use cart_core::validation::validate_line_total;
///
/// assert_eq!(validate_line_total(Money::from_cents(299), 3).unwrap().cents(), 897);
/// assert!(validate_line_total(Money::from_cents(10000), 1_000_000_000_000_000).is_err());
/// ```
pub fn validate_line_total(unit_price: Money, qty: i64) -> ValidationResult<Money> {
    unit_price
        .checked_multiply_quantity(qty)
        .filter(|total| *total <= MAX_CART_AMOUNT)
        .ok_or_else(|| ValidationError::out_of_range("quantity", 1, max_quantity(unit_price)))
}

/// Largest quantity whose line total stays within [`MAX_CART_AMOUNT`].
fn max_quantity(unit_price: Money) -> i64 {
    if unit_price.is_zero() {
        i64::MAX
    } else {
        MAX_CART_AMOUNT.cents() / unit_price.cents()
    }
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be a finite number
/// - Must be within `0..=100` (both ends inclusive)
pub fn validate_discount_percent(percent: f64) -> ValidationResult<f64> {
    if !percent.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "discount_percent".to_string(),
        });
    }

    if !(0.0..=MAX_DISCOUNT_PERCENT).contains(&percent) {
        return Err(ValidationError::out_of_range(
            "discount_percent",
            0,
            MAX_DISCOUNT_PERCENT as i64,
        ));
    }

    Ok(percent)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("SKU-1").is_ok());
        assert!(validate_product_id("a").is_ok());

        assert_eq!(
            validate_product_id(""),
            Err(ValidationError::required("product_id"))
        );
        // only the empty string is rejected; ids are never trimmed
        assert!(validate_product_id("   ").is_ok());
    }

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("user-42").is_ok());
        assert_eq!(validate_user_id(""), Err(ValidationError::required("user_id")));
        assert!(validate_user_id(" ").is_ok());
    }

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Widget").unwrap(), "Widget");
        assert_eq!(validate_product_name("\tBlue Mug \n").unwrap(), "Blue Mug");
        assert_eq!(validate_product_name(""), Err(ValidationError::required("name")));
        assert!(validate_product_name("  ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(dec!(0)).unwrap(), Money::zero());
        assert_eq!(validate_price(dec!(49.99)).unwrap().cents(), 4999);
        assert_eq!(validate_price(dec!(10.005)).unwrap().cents(), 1001);

        assert_eq!(validate_price(dec!(-0.01)), Err(ValidationError::negative("price")));
        assert_eq!(validate_price(dec!(-100)), Err(ValidationError::negative("price")));
        assert!(matches!(
            validate_price(Decimal::MAX),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_price_negative_zero_is_free() {
        assert_eq!(validate_price(dec!(-0.00)).unwrap(), Money::zero());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_line_total() {
        assert_eq!(
            validate_line_total(Money::from_cents(4999), 3),
            Ok(Money::from_cents(14997))
        );
        assert_eq!(
            validate_line_total(Money::zero(), i64::MAX),
            Ok(Money::zero())
        );
        assert_eq!(validate_line_total(MAX_CART_AMOUNT, 1), Ok(MAX_CART_AMOUNT));

        // overflows i64 outright
        assert_eq!(
            validate_line_total(Money::from_cents(10000), 1_000_000_000_000_000),
            Err(ValidationError::out_of_range(
                "quantity",
                1,
                MAX_CART_AMOUNT.cents() / 10000
            ))
        );
        // fits in i64 but exceeds the cart bound
        assert!(validate_line_total(Money::from_cents(3), i64::MAX / 4).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert_eq!(validate_discount_percent(0.0), Ok(0.0));
        assert_eq!(validate_discount_percent(12.5), Ok(12.5));
        assert_eq!(validate_discount_percent(100.0), Ok(100.0));

        assert!(matches!(
            validate_discount_percent(-0.5),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validate_discount_percent(100.01).is_err());
        assert!(matches!(
            validate_discount_percent(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(validate_discount_percent(f64::INFINITY).is_err());
    }
}

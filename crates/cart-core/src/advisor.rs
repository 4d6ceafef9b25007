//! # Discount Advisor
//!
//! Stateless helpers that suggest a discount percentage. They never touch
//! the cart; the caller decides whether to pass the result to
//! [`ShoppingCart::apply_discount`].
//!
//! ```rust
//! use cart_core::advisor::{suggest_bulk_discount, suggest_loyalty_bonus};
//! use cart_core::ShoppingCart;
//! use rust_decimal::Decimal;
//!
//! let mut cart = ShoppingCart::new("user-42").unwrap();
//! cart.add_item("TV-55", "55\" TV", Decimal::new(54900, 2), 1).unwrap();
//!
//! let percent = suggest_bulk_discount(&cart).max(suggest_loyalty_bonus("Gold"));
//! assert_eq!(percent, 15.0);
//! cart.apply_discount(percent).unwrap();
//! ```

use crate::cart::ShoppingCart;
use crate::money::Money;

/// Subtotal thresholds and their discount, highest first.
const BULK_TIERS: &[(Money, f64)] = &[
    (Money::from_cents(50_000), 15.0),
    (Money::from_cents(20_000), 10.0),
    (Money::from_cents(10_000), 5.0),
];

/// Loyalty level → bonus discount percent.
const LOYALTY_BONUSES: &[(&str, f64)] = &[
    ("bronze", 2.0),
    ("silver", 5.0),
    ("gold", 8.0),
    ("platinum", 12.0),
];

/// Suggests a discount from the cart subtotal.
///
/// | Subtotal    | Discount |
/// |-------------|----------|
/// | ≥ $500.00   | 15%      |
/// | ≥ $200.00   | 10%      |
/// | ≥ $100.00   | 5%       |
/// | otherwise   | 0%       |
pub fn suggest_bulk_discount(cart: &ShoppingCart) -> f64 {
    let subtotal = cart.subtotal();
    BULK_TIERS
        .iter()
        .find(|(threshold, _)| subtotal >= *threshold)
        .map_or(0.0, |(_, percent)| *percent)
}

/// Looks up the bonus for a loyalty level, ignoring case.
/// Unknown levels get 0.
pub fn suggest_loyalty_bonus(loyalty_level: &str) -> f64 {
    let level = loyalty_level.to_lowercase();
    LOYALTY_BONUSES
        .iter()
        .find(|(name, _)| *name == level)
        .map_or(0.0, |(_, bonus)| *bonus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cart_with_subtotal(price: rust_decimal::Decimal) -> ShoppingCart {
        let mut cart = ShoppingCart::new("user-42").unwrap();
        cart.add_item("SKU-1", "Item", price, 1).unwrap();
        cart
    }

    #[test]
    fn test_bulk_discount_tiers() {
        assert_eq!(suggest_bulk_discount(&ShoppingCart::new("u").unwrap()), 0.0);
        assert_eq!(suggest_bulk_discount(&cart_with_subtotal(dec!(99.99))), 0.0);
        assert_eq!(suggest_bulk_discount(&cart_with_subtotal(dec!(100.00))), 5.0);
        assert_eq!(suggest_bulk_discount(&cart_with_subtotal(dec!(199.99))), 5.0);
        assert_eq!(suggest_bulk_discount(&cart_with_subtotal(dec!(200.00))), 10.0);
        assert_eq!(suggest_bulk_discount(&cart_with_subtotal(dec!(499.99))), 10.0);
        assert_eq!(suggest_bulk_discount(&cart_with_subtotal(dec!(500.00))), 15.0);
        assert_eq!(suggest_bulk_discount(&cart_with_subtotal(dec!(10000))), 15.0);
    }

    #[test]
    fn test_bulk_discount_does_not_mutate_cart() {
        let cart = cart_with_subtotal(dec!(250.00));
        let before = cart.discount_percent();

        assert_eq!(suggest_bulk_discount(&cart), 10.0);
        assert_eq!(cart.discount_percent(), before);
        assert!(cart.discount_amount().is_zero());
    }

    #[test]
    fn test_loyalty_bonus_lookup() {
        assert_eq!(suggest_loyalty_bonus("bronze"), 2.0);
        assert_eq!(suggest_loyalty_bonus("silver"), 5.0);
        assert_eq!(suggest_loyalty_bonus("gold"), 8.0);
        assert_eq!(suggest_loyalty_bonus("platinum"), 12.0);
    }

    #[test]
    fn test_loyalty_bonus_ignores_case() {
        assert_eq!(suggest_loyalty_bonus("GOLD"), 8.0);
        assert_eq!(suggest_loyalty_bonus("Platinum"), 12.0);
    }

    #[test]
    fn test_loyalty_bonus_unknown_level() {
        assert_eq!(suggest_loyalty_bonus("diamond"), 0.0);
        assert_eq!(suggest_loyalty_bonus(""), 0.0);
        assert_eq!(suggest_loyalty_bonus(" gold"), 0.0);
    }
}

//! # Cart Demo
//!
//! Builds a cart from a small sample catalog and prints its summary.
//!
//! ## Usage
//! ```bash
//! # Defaults: user "demo-user", no loyalty level, suggestions applied
//! cargo run -p cart-demo
//!
//! # Gold member, show debug logs from the cart
//! CART_LOYALTY_LEVEL=gold RUST_LOG=cart_core=debug cargo run -p cart-demo
//!
//! # Leave the discount off
//! CART_APPLY_SUGGESTED_DISCOUNT=false cargo run -p cart-demo
//! ```

mod config;

use cart_core::{suggest_bulk_discount, suggest_loyalty_bonus, ShoppingCart, ValidationError};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

/// Sample catalog: (product id, name, price in cents, quantity)
const SAMPLE_ITEMS: &[(&str, &str, i64, i64)] = &[
    ("COFFEE-1KG", "Arabica Beans 1kg", 2499, 2),
    ("MUG-BLUE", "Blue Mug", 1250, 4),
    ("KETTLE-GN", "Gooseneck Kettle", 6999, 1),
    ("FILTER-100", "Paper Filters (100)", 599, 3),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = DemoConfig::load()?;
    info!(
        user_id = %config.user_id,
        loyalty_level = %config.loyalty_level,
        apply_suggested_discount = config.apply_suggested_discount,
        "Configuration loaded"
    );

    let cart = build_cart(&config)?;
    info!(
        cart_id = %cart.cart_id(),
        subtotal = %cart.subtotal(),
        discount = %cart.discount_amount(),
        tax = %cart.tax_amount(),
        total = %cart.total(),
        "Cart priced"
    );

    println!("{}", serde_json::to_string_pretty(&cart.summary())?);
    Ok(())
}

/// Fills a cart from the sample catalog and applies the best suggestion.
fn build_cart(config: &DemoConfig) -> Result<ShoppingCart, ValidationError> {
    let mut cart = ShoppingCart::new(config.user_id.as_str())?;

    for &(product_id, name, price_cents, quantity) in SAMPLE_ITEMS {
        cart.add_item(product_id, name, Decimal::new(price_cents, 2), quantity)?;
    }

    let bulk = suggest_bulk_discount(&cart);
    let loyalty = suggest_loyalty_bonus(&config.loyalty_level);
    info!(bulk, loyalty, "Discount suggestions");

    if config.apply_suggested_discount {
        cart.apply_discount(bulk.max(loyalty))?;
    }

    Ok(cart)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cart_core=trace` - Show trace for the library only
/// - Default: INFO, with cart-core at DEBUG
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cart_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(loyalty_level: &str, apply: bool) -> DemoConfig {
        DemoConfig {
            user_id: "demo-user".to_string(),
            loyalty_level: loyalty_level.to_string(),
            apply_suggested_discount: apply,
        }
    }

    #[test]
    fn test_build_cart_without_discount() {
        let cart = build_cart(&config("gold", false)).unwrap();

        assert_eq!(cart.unique_product_count(), 4);
        assert_eq!(cart.total_item_count(), 10);
        assert_eq!(cart.subtotal().cents(), 18794);
        assert_eq!(cart.discount_percent(), 0.0);
    }

    #[test]
    fn test_build_cart_applies_bulk_when_larger() {
        // $187.94 earns 5%; no loyalty level
        let cart = build_cart(&config("none", true)).unwrap();
        assert_eq!(cart.discount_percent(), 5.0);
        assert_eq!(cart.discount_amount().cents(), 940);
    }

    #[test]
    fn test_build_cart_applies_loyalty_when_larger() {
        let cart = build_cart(&config("GOLD", true)).unwrap();

        assert_eq!(cart.discount_percent(), 8.0);
        assert_eq!(cart.discount_amount().cents(), 1504);
        assert_eq!(cart.tax_amount().cents(), 1383);
        assert_eq!(cart.total().cents(), 18673);
    }
}

//! # cart-core: Pure Shopping Cart Pricing
//!
//! This crate holds the pricing and aggregation rules of a shopping cart
//! as pure, synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Callers (cart-demo, a future API layer)               │   │
//! │  │     add_item ──► apply_discount ──► summary ──► JSON            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   money   │  │  advisor  │  │ validation│  │   │
//! │  │   │ CartItem  │  │   Money   │  │ bulk tier │  │   rules   │  │   │
//! │  │   │ShoppingCrt│  │  TaxRate  │  │ loyalty   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NO GLOBAL STATE          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - `CartItem` and the `ShoppingCart` aggregate
//! - [`money`] - Money type with integer cents
//! - [`types`] - `TaxRate` and the `CartSummary` record
//! - [`advisor`] - Suggested bulk and loyalty discounts
//! - [`validation`] - Input checks
//! - [`error`] - `ValidationError`
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::ShoppingCart;
//! use rust_decimal::Decimal;
//!
//! let mut cart = ShoppingCart::new("user-42").unwrap();
//! cart.add_item("SKU-1", "Widget", Decimal::new(10000, 2), 2).unwrap();
//! cart.apply_discount(10.0).unwrap();
//!
//! // $200.00 − $20.00 + 8% tax on $180.00
//! assert_eq!(cart.total().to_string(), "$194.40");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod advisor;
pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use advisor::{suggest_bulk_discount, suggest_loyalty_bonus};
pub use cart::{CartItem, ShoppingCart};
pub use error::{CartResult, ValidationError};
pub use money::Money;
pub use types::{CartSummary, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every cart: 8%.
///
/// Fixed for this version; carts do not expose a way to change it.
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(800);

/// Largest subtotal a cart may reach (and so the largest line total).
///
/// Half of `i64::MAX` cents, which leaves room for tax on top of the
/// subtotal without the total overflowing.
pub const MAX_CART_AMOUNT: Money = Money::from_cents(i64::MAX / 2);

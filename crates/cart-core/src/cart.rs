//! # Cart
//!
//! The shopping cart aggregate and its line items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Mutation                        State Change                           │
//! │  ────────                        ────────────                           │
//! │  add_item(new id) ─────────────► items.insert(id, CartItem)             │
//! │  add_item(existing id) ────────► items[id].qty += qty (name/price kept) │
//! │  update_item_quantity(id, n≥1) ► items[id].qty = n                      │
//! │  update_item_quantity(id, n<1) ► items.remove(id)                       │
//! │  remove_item(id) ──────────────► items.remove(id)                       │
//! │  apply_discount(p) ────────────► discount_percent = p (overwrite)       │
//! │  clear() ──────────────────────► items.clear(), discount_percent = 0    │
//! │                                                                         │
//! │  Derived values are recomputed on every call:                           │
//! │                                                                         │
//! │  subtotal = Σ line_total                                                │
//! │  discount = subtotal × discount% (rounded)                              │
//! │  tax      = (subtotal − discount) × 8% (rounded)                        │
//! │  total    = subtotal − discount + tax                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! A cart is a plain owned value mutated through `&mut self`. Hosts that
//! share one across threads must serialize access per cart themselves.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CartResult, ValidationError};
use crate::money::Money;
use crate::types::{CartSummary, TaxRate};
use crate::validation::{
    validate_discount_percent, validate_line_total, validate_price, validate_product_id,
    validate_product_name, validate_quantity, validate_user_id,
};
use crate::{DEFAULT_TAX_RATE, MAX_CART_AMOUNT};

// =============================================================================
// Cart Item
// =============================================================================

/// A validated line item in the cart.
///
/// ## Design Notes
/// - `unit_price` is frozen at creation, rounded to the cent
/// - Only `quantity` can change after creation, and never below 1
/// - `unit_price × quantity` never exceeds `MAX_CART_AMOUNT`
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CartItem {
    product_id: String,
    name: String,
    unit_price: Money,
    quantity: i64,
    #[ts(as = "String")]
    added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new line item.
    ///
    /// ## Errors
    /// `ValidationError` if the product id is empty, the name is blank, the
    /// price is negative, the quantity is below 1, or the line total would
    /// exceed `MAX_CART_AMOUNT`.
    ///
    /// ```rust
    /// use cart_core::cart::CartItem;
    /// use rust_decimal::Decimal;
    ///
    /// let item = CartItem::new("SKU-1", "  Widget ", Decimal::new(10005, 3), 2).unwrap();
    /// assert_eq!(item.name(), "Widget");
    /// assert_eq!(item.unit_price().cents(), 1001);
    /// assert_eq!(item.line_total().cents(), 2002);
    /// ```
    pub fn new(
        product_id: impl Into<String>,
        name: &str,
        price: Decimal,
        quantity: i64,
    ) -> CartResult<Self> {
        let product_id = product_id.into();
        validate_product_id(&product_id)?;
        let name = validate_product_name(name)?;
        let unit_price = validate_price(price)?;
        validate_quantity(quantity)?;
        validate_line_total(unit_price, quantity)?;

        Ok(CartItem {
            product_id,
            name,
            unit_price,
            quantity,
            added_at: Utc::now(),
        })
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// Unit price × quantity. Exact, and bounded by `MAX_CART_AMOUNT`
    /// because every quantity change is checked against it.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Replaces the quantity.
    ///
    /// ## Errors
    /// `ValidationError` if `quantity < 1` or the line total would exceed
    /// `MAX_CART_AMOUNT`; the item is left unchanged.
    pub fn set_quantity(&mut self, quantity: i64) -> CartResult<()> {
        validate_quantity(quantity)?;
        validate_line_total(self.unit_price, quantity)?;
        self.quantity = quantity;
        Ok(())
    }
}

// =============================================================================
// Shopping Cart
// =============================================================================

/// A user's shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product merges)
/// - Every key in `items` equals its item's `product_id`
/// - Every item has quantity ≥ 1
/// - The subtotal never exceeds `MAX_CART_AMOUNT`
/// - `discount_percent` is within `0..=100`
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    cart_id: String,
    user_id: String,
    items: BTreeMap<String, CartItem>,
    discount_percent: f64,
    tax_rate: TaxRate,
    created_at: DateTime<Utc>,
}

impl ShoppingCart {
    /// Creates an empty cart for `user_id` with a fresh cart id.
    ///
    /// ```rust
    /// use cart_core::ShoppingCart;
    ///
    /// let cart = ShoppingCart::new("user-42").unwrap();
    /// assert!(cart.is_empty());
    /// assert!(ShoppingCart::new("").is_err());
    /// ```
    pub fn new(user_id: impl Into<String>) -> CartResult<Self> {
        let user_id = user_id.into();
        validate_user_id(&user_id)?;

        let cart = ShoppingCart {
            cart_id: Uuid::new_v4().to_string(),
            user_id,
            items: BTreeMap::new(),
            discount_percent: 0.0,
            tax_rate: DEFAULT_TAX_RATE,
            created_at: Utc::now(),
        };
        debug!(cart_id = %cart.cart_id, user_id = %cart.user_id, "Cart created");
        Ok(cart)
    }

    pub fn cart_id(&self) -> &str {
        &self.cart_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Adds a product or increases its quantity if already present.
    ///
    /// ## Behavior
    /// - New product: name, price and quantity are validated and a new item
    ///   is inserted
    /// - Existing product: the stored quantity becomes `current + quantity`;
    ///   the first name and price stay in effect and are not re-validated
    ///
    /// ## Errors
    /// `ValidationError` for invalid input on first insertion, when the
    /// merged quantity would drop below 1 or overflow, or when the subtotal
    /// would exceed `MAX_CART_AMOUNT`. The cart is unchanged on error.
    pub fn add_item(
        &mut self,
        product_id: &str,
        name: &str,
        price: Decimal,
        quantity: i64,
    ) -> CartResult<()> {
        if let Some(current) = self.items.get(product_id).map(CartItem::quantity) {
            let merged = current
                .checked_add(quantity)
                .ok_or_else(|| ValidationError::out_of_range("quantity", 1, i64::MAX))?;
            self.set_item_quantity(product_id, merged)?;
            debug!(
                cart_id = %self.cart_id,
                product_id,
                quantity = merged,
                "Item quantity merged"
            );
            return Ok(());
        }

        let item = CartItem::new(product_id, name, price, quantity)?;
        self.check_cart_bounds(product_id, quantity, item.line_total())?;
        debug!(
            cart_id = %self.cart_id,
            product_id,
            unit_price = %item.unit_price,
            quantity,
            "Item added"
        );
        self.items.insert(item.product_id.clone(), item);
        Ok(())
    }

    /// Removes an item; returns whether anything was removed.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let removed = self.items.remove(product_id).is_some();
        if removed {
            debug!(cart_id = %self.cart_id, product_id, "Item removed");
        }
        removed
    }

    /// Sets an item's quantity.
    ///
    /// ## Behavior
    /// - Unknown product: returns `false`
    /// - `quantity < 1`: removes the item (same result as `remove_item`)
    /// - Otherwise: sets the quantity and returns `true`
    ///
    /// ## Errors
    /// `ValidationError` if the new line total or subtotal would exceed
    /// `MAX_CART_AMOUNT`; the item keeps its old quantity.
    pub fn update_item_quantity(&mut self, product_id: &str, quantity: i64) -> CartResult<bool> {
        if !self.items.contains_key(product_id) {
            return Ok(false);
        }

        if quantity < 1 {
            return Ok(self.remove_item(product_id));
        }

        let updated = self.set_item_quantity(product_id, quantity)?;
        if updated {
            debug!(cart_id = %self.cart_id, product_id, quantity, "Item quantity updated");
        }
        Ok(updated)
    }

    /// Sets an existing item's quantity after checking the cart-wide bound.
    /// Returns `false` if the product is not in the cart.
    fn set_item_quantity(&mut self, product_id: &str, quantity: i64) -> CartResult<bool> {
        let Some(item) = self.items.get(product_id) else {
            return Ok(false);
        };
        validate_quantity(quantity)?;
        let line_total = validate_line_total(item.unit_price, quantity)?;
        self.check_cart_bounds(product_id, quantity, line_total)?;

        match self.items.get_mut(product_id) {
            Some(item) => item.set_quantity(quantity).map(|()| true),
            None => Ok(false),
        }
    }

    /// Checks that replacing `product_id`'s line with `quantity` units worth
    /// `line_total` keeps the item count within `i64` and the subtotal within
    /// `MAX_CART_AMOUNT`.
    fn check_cart_bounds(
        &self,
        product_id: &str,
        quantity: i64,
        line_total: Money,
    ) -> CartResult<()> {
        let others = self
            .items
            .values()
            .filter(|item| item.product_id != product_id);
        let other_quantity: i64 = others.clone().map(CartItem::quantity).sum();
        let other_total: Money = others.map(CartItem::line_total).sum();

        if other_quantity.checked_add(quantity).is_none() {
            return Err(ValidationError::out_of_range(
                "quantity",
                1,
                i64::MAX - other_quantity,
            ));
        }

        match other_total.checked_add(line_total) {
            Some(subtotal) if subtotal <= MAX_CART_AMOUNT => Ok(()),
            _ => Err(ValidationError::out_of_range(
                "subtotal",
                0,
                MAX_CART_AMOUNT.cents(),
            )),
        }
    }

    pub fn get_item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.get(product_id)
    }

    /// Snapshot of all items, ordered by product id.
    pub fn get_all_items(&self) -> Vec<CartItem> {
        self.items.values().cloned().collect()
    }

    /// Sum of quantities across all items.
    pub fn total_item_count(&self) -> i64 {
        self.items.values().map(CartItem::quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_product_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of line totals, before discount and tax.
    pub fn subtotal(&self) -> Money {
        self.items.values().map(CartItem::line_total).sum()
    }

    /// Sets the cart-wide discount, replacing any previous one.
    ///
    /// ## Errors
    /// `ValidationError` if `percent` is not a finite number in `0..=100`.
    pub fn apply_discount(&mut self, percent: f64) -> CartResult<()> {
        self.discount_percent = validate_discount_percent(percent)?;
        debug!(cart_id = %self.cart_id, discount_percent = percent, "Discount applied");
        Ok(())
    }

    /// Subtotal × discount percent, rounded to the cent.
    pub fn discount_amount(&self) -> Money {
        if self.discount_percent <= 0.0 {
            return Money::zero();
        }

        let percent = Decimal::from_f64(self.discount_percent).unwrap_or(Decimal::ZERO);
        self.subtotal().percentage(percent)
    }

    /// Tax on the discounted subtotal, rounded to the cent.
    ///
    /// Tax is never charged on the pre-discount subtotal.
    pub fn tax_amount(&self) -> Money {
        let taxable = self.subtotal() - self.discount_amount();
        taxable.calculate_tax(self.tax_rate)
    }

    /// Subtotal − discount + tax.
    ///
    /// Each term is rounded to the cent on its own before they are combined,
    /// so the total can differ by a cent from rounding the exact expression
    /// once.
    ///
    /// ```rust
    /// use cart_core::ShoppingCart;
    /// use rust_decimal::Decimal;
    ///
    /// let mut cart = ShoppingCart::new("user-42").unwrap();
    /// cart.add_item("SKU-1", "Widget", Decimal::new(10000, 2), 2).unwrap();
    /// cart.apply_discount(10.0).unwrap();
    ///
    /// assert_eq!(cart.subtotal().cents(), 20000);
    /// assert_eq!(cart.discount_amount().cents(), 2000);
    /// assert_eq!(cart.tax_amount().cents(), 1440);
    /// assert_eq!(cart.total().cents(), 19440);
    /// ```
    pub fn total(&self) -> Money {
        self.subtotal() - self.discount_amount() + self.tax_amount()
    }

    /// Removes every item and resets the discount. The tax rate is kept.
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount_percent = 0.0;
        debug!(cart_id = %self.cart_id, "Cart cleared");
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Builds a `CartSummary` from the current state.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            cart_id: self.cart_id.clone(),
            user_id: self.user_id.clone(),
            total_items: self.total_item_count(),
            unique_products: self.unique_product_count(),
            subtotal: self.subtotal().to_decimal(),
            discount_percent: self.discount_percent,
            discount_amount: self.discount_amount().to_decimal(),
            tax_rate: self.tax_rate.fraction(),
            tax_amount: self.tax_amount().to_decimal(),
            total: self.total().to_decimal(),
            created_at: self
                .created_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

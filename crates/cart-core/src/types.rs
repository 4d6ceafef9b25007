//! # Domain Types
//!
//! Value types shared by the cart and its callers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────────────────┐             │
//! │  │    TaxRate      │   │          CartSummary            │             │
//! │  │  ─────────────  │   │  ─────────────────────────────  │             │
//! │  │  bps (u32)      │   │  cart_id, user_id               │             │
//! │  │  800 = 8%       │   │  total_items, unique_products   │             │
//! │  └─────────────────┘   │  subtotal, discount_*, tax_*    │             │
//! │                        │  total, created_at (ISO-8601)   │             │
//! │                        └─────────────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 800 bps = 8%.
/// Integer bps keep tax math exact on integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction (800 bps → 0.08), for reporting only.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Point-in-time snapshot of a cart's identity and totals.
///
/// This is the only serialization contract the cart exposes. Monetary
/// fields serialize as JSON numbers with two fractional digits, and
/// `created_at` is an ISO-8601 (RFC 3339) UTC timestamp.
///
/// ```json
/// {
///   "cart_id": "8d0b5c0e-…",
///   "user_id": "user-42",
///   "total_items": 2,
///   "unique_products": 1,
///   "subtotal": 200.0,
///   "discount_percent": 10.0,
///   "discount_amount": 20.0,
///   "tax_rate": 0.08,
///   "tax_amount": 14.4,
///   "total": 194.4,
///   "created_at": "2026-10-15T09:30:00.000000Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CartSummary {
    pub cart_id: String,
    pub user_id: String,
    /// Sum of quantities across all line items.
    pub total_items: i64,
    /// Number of distinct products.
    pub unique_products: usize,
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub subtotal: Decimal,
    pub discount_percent: f64,
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub discount_amount: Decimal,
    /// Tax rate as a fraction (0.08 = 8%).
    pub tax_rate: f64,
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub tax_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub total: Decimal,
    pub created_at: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert!((rate.fraction() - 0.08).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tax_rate_serializes_as_bps() {
        let json = serde_json::to_string(&TaxRate::from_bps(825)).unwrap();
        assert_eq!(json, "825");
    }
}

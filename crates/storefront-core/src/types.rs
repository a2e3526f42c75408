//! # Domain Types
//!
//! Core domain types used throughout the Storefront engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │    CartLine    │   │     Coupon     │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (UUID)     │   │  product       │   │  name          │      │
//! │  │  name          │   │   (snapshot)   │   │  code (unique) │      │
//! │  │  price_cents   │   │  quantity      │   │  discount      │      │
//! │  │  stock         │   │  added_at      │   │   Amount |     │      │
//! │  │  discounts[]   │   └────────────────┘   │   Percentage   │      │
//! │  └────────────────┘                        └────────────────┘      │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │  DiscountTier  │   │   CartTotals   │   │  Notification  │      │
//! │  │  quantity ≥ N  │   │  before/after  │   │  id, message,  │      │
//! │  │  rate_bps      │   │  (minor units) │   │  severity      │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartLine` holds a frozen copy of its `Product` taken when the line
//! was created. Guard decisions (remaining stock) always re-read the live
//! catalog entry; display data comes from the snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Tier
// =============================================================================

/// One row of a product's quantity-discount table.
///
/// `quantity` is the minimum line quantity that unlocks `rate_bps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountTier {
    /// Minimum quantity threshold (positive).
    pub quantity: i64,

    /// Discount rate in basis points (1000 = 10%).
    pub rate_bps: u32,
}

// =============================================================================
// Product
// =============================================================================

/// A purchasable catalog item with finite stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4), immutable once created.
    pub id: String,

    /// Display name shown in the storefront.
    pub name: String,

    /// Optional description, matched by the catalog search.
    pub description: Option<String>,

    /// Price in minor currency units (non-negative).
    pub price_cents: i64,

    /// Units available for sale (non-negative).
    pub stock: i64,

    /// Quantity-discount tiers, ordered by ascending threshold.
    pub discounts: Vec<DiscountTier>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One product's entry in the cart.
///
/// ## Invariants
/// - `quantity` is positive and never exceeds the product's stock
/// - A cart holds at most one line per product id
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product data frozen at the time the line was created.
    pub product: Product,

    /// Units of this product in the cart.
    pub quantity: i64,

    /// When this line was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product snapshot.
    pub fn new(product: Product, quantity: i64) -> Self {
        CartLine {
            product,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// The undiscounted total for this line (price × quantity).
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// The discount a coupon grants, applied to the whole cart total.
///
/// Serialized as `{ "discountType": "amount", "discountValue": 5000 }` to
/// match the frontend's coupon shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "discountType", content = "discountValue", rename_all = "camelCase")]
pub enum CouponDiscount {
    /// Fixed amount off, in minor units (non-negative).
    Amount(i64),
    /// Percentage off, whole percent in 0..=100.
    Percentage(u32),
}

/// A named, coded discount rule for the whole cart.
///
/// `code` is unique within the coupon store; coupons are immutable once
/// created except by explicit deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub name: String,
    pub code: String,
    #[serde(flatten)]
    pub discount: CouponDiscount,
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart aggregate totals, recomputed from current state on every query.
///
/// `after_discount <= before_discount` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of undiscounted `price × quantity` over all lines.
    pub before_discount_cents: i64,

    /// Sum of discounted line totals, further reduced by a valid coupon.
    pub after_discount_cents: i64,
}

impl CartTotals {
    #[inline]
    pub fn before_discount(&self) -> Money {
        Money::from_cents(self.before_discount_cents)
    }

    #[inline]
    pub fn after_discount(&self) -> Money {
        Money::from_cents(self.after_discount_cents)
    }
}

// =============================================================================
// Order Confirmation
// =============================================================================

/// Returned by order completion; the cart and coupon selection are
/// cleared atomically when this is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_number: String,
}

// =============================================================================
// Notification
// =============================================================================

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
}

/// An ephemeral user-facing outcome message.
///
/// Auto-expires after a fixed interval; a side channel for guard and
/// validation outcomes, not part of the pricing invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub severity: Severity,
}

// =============================================================================
// Unit Tests
// =============================================================================

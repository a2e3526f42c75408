//! # storefront-core: Pure Pricing & Inventory Logic
//!
//! This crate is the **heart** of the Storefront engine. It contains all
//! pricing, discount, coupon, and stock-guard rules as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript)                      │   │
//! │  │    Product list ──► Cart UI ──► Coupon UI ──► Checkout      │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │              storefront-state (stores)                      │   │
//! │  │    CatalogStore, CartStore, CouponStore, NotificationHub    │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────┐ ┌───────┐  │   │
//! │  │  │  types  │ │  money  │ │discount │ │ coupon │ │ stock │  │   │
//! │  │  │ Product │ │  Money  │ │  tiers  │ │ apply  │ │ guard │  │   │
//! │  │  │CartLine │ │  Rate   │ │  bonus  │ │ checks │ │ plans │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └────────┘ └───────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO TIMERS • NO STORAGE • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, Coupon, etc.)
//! - [`money`] - Money and discount-rate types with integer arithmetic
//! - [`discount`] - Quantity-tier discounts and the bulk-purchase bonus
//! - [`pricing`] - Line totals and cart aggregate totals
//! - [`coupon`] - Coupon validity and application
//! - [`stock`] - Inventory guard: remaining stock and mutation plans
//! - [`error`] - Domain error types
//! - [`validation`] - Form-input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, timers are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are minor units (i64), rates are
//!    basis points (u32) - no floating point in money math
//! 4. **Total Calculators**: The pricing/discount/coupon calculators never
//!    fail; only guard and validation functions return errors
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::money::{DiscountRate, Money};
//!
//! // 10,000 minor units at a 10% discount
//! let price = Money::from_cents(10_000);
//! let discounted = price.apply_discount(DiscountRate::from_percent(10));
//! assert_eq!(discounted.cents(), 9_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coupon;
pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Money` instead of
// `use storefront_core::money::Money`

pub use error::{EngineError, EngineResult, ValidationError};
pub use money::{DiscountRate, Money};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cart-line quantity at which the cart-wide bulk-purchase bonus unlocks.
///
/// ## Business Rule
/// Once ANY line in the cart reaches this quantity, every line in the cart
/// (including lines with no tier discount of their own) earns the bonus.
/// This cross-line coupling is confirmed behavior, not an accident.
pub const BULK_DISCOUNT_THRESHOLD: i64 = 10;

/// The bulk-purchase bonus, in basis points (500 = +5%).
pub const BULK_DISCOUNT_BONUS_BPS: u32 = 500;

/// Hard cap on the combined per-line discount rate (5000 = 50%).
pub const MAX_DISCOUNT_BPS: u32 = 5000;

/// Minimum pre-coupon cart total (minor units) for percentage coupons.
///
/// ## Business Rule
/// Percentage coupons are blocked below this total; fixed-amount coupons
/// have no lower bound.
pub const PERCENTAGE_COUPON_MIN_TOTAL: i64 = 10_000;

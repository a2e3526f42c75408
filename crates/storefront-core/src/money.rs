//! # Money Module
//!
//! Provides the `Money` and `DiscountRate` types for handling monetary
//! values and discount rates safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Minor Units + Basis Points                   │
//! │    Amounts are i64 minor units (10000 = ₩10,000 / $100.00)          │
//! │    Rates are u32 basis points (1000 bps = 10%)                      │
//! │    round(x * (1 - rate)) = (x * (10000 - bps) + 5000) / 10000       │
//! │                                                                     │
//! │  One rounding step per discounted amount, exactly reproducing       │
//! │  half-up rounding of the real-valued computation.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::{DiscountRate, Money};
//!
//! let price = Money::from_cents(10_000);
//!
//! // 15% off, rounded once
//! let rate = DiscountRate::from_bps(1500);
//! assert_eq!(price.apply_discount(rate).cents(), 8_500);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(99.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::MAX_DISCOUNT_BPS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows intermediate negative values in arithmetic;
///   all engine outputs are clamped non-negative where the rules demand it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// EVERY monetary value in the engine flows through this type: product
/// prices, line totals, cart totals, coupon amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (cents).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Subtracts, flooring the result at zero.
    ///
    /// Fixed-amount coupons use this: a 5,000 coupon on a 3,000 cart
    /// yields 0, never a negative total.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let total = Money::from_cents(3_000);
    /// assert_eq!(total.saturating_sub(Money::from_cents(5_000)), Money::zero());
    /// ```
    #[inline]
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money((self.0 - other.0).max(0))
    }

    /// Applies a discount rate and returns the discounted amount.
    ///
    /// ## Rounding
    /// One rounding step, half-up, via integer math:
    /// `(amount * (10000 - bps) + 5000) / 10000`.
    /// Equivalent to `round(amount * (1 - rate))` applied once, never
    /// per-unit. i128 intermediate prevents overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::{DiscountRate, Money};
    ///
    /// let subtotal = Money::from_cents(30_000);
    /// let discounted = subtotal.apply_discount(DiscountRate::from_bps(1000)); // 10% off
    /// assert_eq!(discounted.cents(), 27_000);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let keep_bps = (10_000 - rate.bps()) as i128;
        let discounted = (self.0 as i128 * keep_bps + 5_000) / 10_000;
        Money::from_cents(discounted as i64)
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount rate in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000. The original rules speak in fractional
/// rates (0.1 = 10% tier, 0.05 bulk bonus, 0.5 cap); in basis points those
/// are 1000, 500, and 5000 with no floating point anywhere in money math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points, clamped to 100%.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        if bps > 10_000 {
            DiscountRate(10_000)
        } else {
            DiscountRate(bps)
        }
    }

    /// Creates a discount rate from a whole percentage (for coupons).
    #[inline]
    pub const fn from_percent(pct: u32) -> Self {
        DiscountRate::from_bps(pct * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds another rate, clamping the sum at the engine-wide cap (50%).
    ///
    /// Used when stacking the bulk-purchase bonus on a tier rate.
    #[inline]
    pub const fn saturating_add_capped(&self, bonus_bps: u32) -> Self {
        let sum = self.0 + bonus_bps;
        if sum > MAX_DISCOUNT_BPS {
            DiscountRate(MAX_DISCOUNT_BPS)
        } else {
            DiscountRate(sum)
        }
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

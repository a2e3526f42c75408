//! # Pricing Engine
//!
//! Computes a line's discounted total and the cart's aggregate totals
//! before/after coupon.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 cart_totals(cart, selected_coupon)                  │
//! │                                                                     │
//! │  for each line:                                                     │
//! │    before += price × quantity               (undiscounted)          │
//! │    after  += line_total(line, cart)         (tier + bulk bonus)     │
//! │                                                                     │
//! │  if coupon selected AND valid for `after`:                          │
//! │    after = coupon::apply(after, coupon)                             │
//! │                                                                     │
//! │  invariant: after ≤ before                                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never cached; callers recompute from current state on every
//! cart or coupon change.

use crate::coupon;
use crate::discount::max_applicable_discount;
use crate::money::Money;
use crate::types::{CartLine, CartTotals, Coupon};

/// The discounted total for one cart line.
///
/// `round(price × quantity × (1 - rate))`, rounded once for the whole
/// line, not per unit.
///
/// ## Example
/// ```rust
/// use storefront_core::pricing::line_total;
/// use storefront_core::{CartLine, DiscountTier, Product};
///
/// let product = Product {
///     id: "p1".into(),
///     name: "Monitor".into(),
///     description: None,
///     price_cents: 10_000,
///     stock: 5,
///     discounts: vec![DiscountTier { quantity: 3, rate_bps: 1000 }],
/// };
/// let cart = vec![CartLine::new(product, 3)];
///
/// assert_eq!(line_total(&cart[0], &cart).cents(), 27_000);
/// ```
pub fn line_total(line: &CartLine, cart: &[CartLine]) -> Money {
    let rate = max_applicable_discount(line, cart);
    line.subtotal().apply_discount(rate)
}

/// Aggregate cart totals before and after discounts.
///
/// A selected coupon is applied only when it validates against the
/// pre-coupon discounted total; a selection that has become invalid
/// (e.g. the cart shrank below a percentage coupon's floor) is skipped,
/// never applied.
pub fn cart_totals(cart: &[CartLine], selected_coupon: Option<&Coupon>) -> CartTotals {
    let mut before = Money::zero();
    let mut after = Money::zero();

    for line in cart {
        before += line.subtotal();
        after += line_total(line, cart);
    }

    if let Some(coupon) = selected_coupon {
        if coupon::is_valid(coupon, after) {
            after = coupon::apply(after, coupon);
        }
    }

    CartTotals {
        before_discount_cents: before.cents(),
        after_discount_cents: after.cents(),
    }
}

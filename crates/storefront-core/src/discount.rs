//! # Discount Rules
//!
//! Quantity-tier discounts and the cart-wide bulk-purchase bonus.
//!
//! ## Rule Summary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Per-line rate = best tier rate whose threshold ≤ line quantity     │
//! │                                                                     │
//! │  If ANY line in the cart has quantity ≥ 10:                         │
//! │      rate += 5%   (applies to EVERY line, even tierless ones)       │
//! │                                                                     │
//! │  Combined rate is capped at 50%.                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cross-line coupling of the bulk bonus is confirmed behavior: a
//! single quantity-10 line discounts the whole cart.

use crate::money::DiscountRate;
use crate::types::CartLine;
use crate::{BULK_DISCOUNT_BONUS_BPS, BULK_DISCOUNT_THRESHOLD};

/// Returns the highest discount rate the line qualifies for.
///
/// Tier selection takes the maximum `rate_bps` among tiers whose quantity
/// threshold is met - ties and out-of-order tables resolve to the best
/// rate, not the first match. A line with no qualifying tier and no bulk
/// bonus yields the zero rate.
///
/// ## Example
/// ```rust
/// use storefront_core::discount::max_applicable_discount;
/// use storefront_core::{CartLine, DiscountTier, Product};
///
/// let product = Product {
///     id: "p1".into(),
///     name: "Keyboard".into(),
///     description: None,
///     price_cents: 10_000,
///     stock: 20,
///     discounts: vec![DiscountTier { quantity: 3, rate_bps: 1000 }],
/// };
/// let cart = vec![CartLine::new(product, 3)];
///
/// assert_eq!(max_applicable_discount(&cart[0], &cart).bps(), 1000);
/// ```
pub fn max_applicable_discount(line: &CartLine, cart: &[CartLine]) -> DiscountRate {
    let base_bps = line
        .product
        .discounts
        .iter()
        .filter(|tier| line.quantity >= tier.quantity)
        .map(|tier| tier.rate_bps)
        .max()
        .unwrap_or(0);

    // The 50% cap applies to the combined rate, bonus or not
    let base = DiscountRate::from_bps(base_bps.min(crate::MAX_DISCOUNT_BPS));

    if has_bulk_purchase(cart) {
        base.saturating_add_capped(BULK_DISCOUNT_BONUS_BPS)
    } else {
        base
    }
}

/// Whether any line in the cart unlocks the bulk-purchase bonus.
#[inline]
pub fn has_bulk_purchase(cart: &[CartLine]) -> bool {
    cart.iter()
        .any(|line| line.quantity >= BULK_DISCOUNT_THRESHOLD)
}

//! # Coupon Rules
//!
//! Validates coupon applicability against a cart total and computes the
//! discounted amount for a given coupon.
//!
//! Applying an invalid coupon is a caller error: the engine rejects the
//! selection up front via [`error_message`], it never silently clamps.

use crate::money::{DiscountRate, Money};
use crate::types::{Coupon, CouponDiscount};
use crate::PERCENTAGE_COUPON_MIN_TOTAL;

/// Whether the coupon may be applied to a cart with the given total.
///
/// Percentage coupons require a pre-coupon total of at least 10,000 minor
/// units; fixed-amount coupons have no lower bound.
pub fn is_valid(coupon: &Coupon, cart_total: Money) -> bool {
    error_message(coupon, cart_total).is_none()
}

/// The user-facing reason a coupon cannot be applied, or `None` when it can.
///
/// ## Example
/// ```rust
/// use storefront_core::coupon::error_message;
/// use storefront_core::{Coupon, CouponDiscount, Money};
///
/// let coupon = Coupon {
///     name: "20% off".into(),
///     code: "PCT20".into(),
///     discount: CouponDiscount::Percentage(20),
/// };
///
/// assert!(error_message(&coupon, Money::from_cents(9_999)).is_some());
/// assert!(error_message(&coupon, Money::from_cents(10_000)).is_none());
/// ```
pub fn error_message(coupon: &Coupon, cart_total: Money) -> Option<String> {
    match coupon.discount {
        CouponDiscount::Percentage(_) if cart_total.cents() < PERCENTAGE_COUPON_MIN_TOTAL => {
            Some(format!(
                "Percentage coupons require a cart total of at least {}",
                PERCENTAGE_COUPON_MIN_TOTAL
            ))
        }
        _ => None,
    }
}

/// Applies the coupon to a total, returning the reduced amount.
///
/// - Amount coupons: `max(0, total - value)`
/// - Percentage coupons: `round(total * (1 - value/100))`, rounded once
pub fn apply(total: Money, coupon: &Coupon) -> Money {
    match coupon.discount {
        CouponDiscount::Amount(value) => total.saturating_sub(Money::from_cents(value)),
        CouponDiscount::Percentage(pct) => total.apply_discount(DiscountRate::from_percent(pct)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount_coupon(value: i64) -> Coupon {
        Coupon {
            name: format!("{} off", value),
            code: format!("AMOUNT{}", value),
            discount: CouponDiscount::Amount(value),
        }
    }

    fn percentage_coupon(pct: u32) -> Coupon {
        Coupon {
            name: format!("{}% off", pct),
            code: format!("PCT{}", pct),
            discount: CouponDiscount::Percentage(pct),
        }
    }

    #[test]
    fn test_amount_coupon_always_valid() {
        let coupon = amount_coupon(5_000);
        assert!(is_valid(&coupon, Money::zero()));
        assert!(is_valid(&coupon, Money::from_cents(100)));
        assert!(error_message(&coupon, Money::from_cents(100)).is_none());
    }

    #[test]
    fn test_percentage_coupon_blocked_below_floor() {
        let coupon = percentage_coupon(20);

        assert!(!is_valid(&coupon, Money::from_cents(9_999)));
        assert!(error_message(&coupon, Money::from_cents(9_999)).is_some());

        // Exactly at the floor is allowed
        assert!(is_valid(&coupon, Money::from_cents(10_000)));
    }

    #[test]
    fn test_apply_amount() {
        // 50,000 cart, 5,000 coupon → 45,000
        let total = apply(Money::from_cents(50_000), &amount_coupon(5_000));
        assert_eq!(total.cents(), 45_000);
    }

    #[test]
    fn test_apply_amount_floors_at_zero() {
        let total = apply(Money::from_cents(3_000), &amount_coupon(5_000));
        assert_eq!(total, Money::zero());
    }

    #[test]
    fn test_apply_percentage() {
        // 50,000 cart, 20% coupon → 40,000
        let total = apply(Money::from_cents(50_000), &percentage_coupon(20));
        assert_eq!(total.cents(), 40_000);
    }

    #[test]
    fn test_apply_percentage_rounds_once() {
        // 10,001 at 15% off: 8500.85 → 8501 (half-up)
        let total = apply(Money::from_cents(10_001), &percentage_coupon(15));
        assert_eq!(total.cents(), 8_501);
    }
}

//! # Coupon Store
//!
//! Owns the coupon collection and the (at most one) selected coupon held
//! by the checkout session.
//!
//! ## Selection Lifecycle
//! A coupon becomes selected only after passing validation against the
//! current cart total; the selection is cleared on order completion, on
//! deletion of the referenced coupon, or explicitly by the user.

use std::sync::{Arc, Mutex};

use tracing::debug;

use storefront_core::validation::{validate_coupon_code, validate_coupon_discount};
use storefront_core::{coupon, Coupon, EngineError, EngineResult, Money};

use crate::notify::NotificationHub;

/// The coupon collection plus the transient checkout selection.
#[derive(Debug, Clone)]
pub struct CouponStore {
    coupons: Arc<Mutex<Vec<Coupon>>>,
    // Shared with CartStore::complete_order, which clears the selection
    // under the same critical section that clears the cart.
    pub(crate) selected: Arc<Mutex<Option<Coupon>>>,
    hub: NotificationHub,
}

impl CouponStore {
    /// Creates an empty coupon store reporting into `hub`.
    pub fn new(hub: NotificationHub) -> Self {
        CouponStore {
            coupons: Arc::new(Mutex::new(Vec::new())),
            selected: Arc::new(Mutex::new(None)),
            hub,
        }
    }

    /// Creates a store pre-populated with `coupons`.
    pub fn with_coupons(hub: NotificationHub, coupons: Vec<Coupon>) -> Self {
        CouponStore {
            coupons: Arc::new(Mutex::new(coupons)),
            selected: Arc::new(Mutex::new(None)),
            hub,
        }
    }

    /// Adds a coupon; a duplicate code is rejected without mutation.
    pub fn add(&self, new_coupon: Coupon) -> EngineResult<()> {
        validate_coupon_code(&new_coupon.code)?;
        validate_coupon_discount(&new_coupon.discount)?;

        let mut coupons = self.coupons.lock().expect("coupon mutex poisoned");

        if coupons.iter().any(|c| c.code == new_coupon.code) {
            let err = EngineError::DuplicateCouponCode {
                code: new_coupon.code.clone(),
            };
            debug!(code = %new_coupon.code, "duplicate coupon rejected");
            self.hub.error(err.to_string());
            return Err(err);
        }

        coupons.push(new_coupon);
        drop(coupons);

        self.hub.success("Coupon added.");
        Ok(())
    }

    /// Validates and selects a coupon for the checkout session.
    ///
    /// `cart_total` is the pre-coupon discounted cart total. An invalid
    /// coupon is rejected with its reason and the previous selection (if
    /// any) stays in place.
    pub fn apply(&self, coupon: Coupon, cart_total: Money) -> EngineResult<()> {
        if let Some(reason) = coupon::error_message(&coupon, cart_total) {
            debug!(code = %coupon.code, %reason, "coupon rejected");
            self.hub.error(reason.clone());
            return Err(EngineError::CouponNotApplicable { reason });
        }

        debug!(code = %coupon.code, "coupon applied");
        *self.selected.lock().expect("coupon mutex poisoned") = Some(coupon);
        self.hub.success("Coupon applied.");
        Ok(())
    }

    /// Deletes a coupon by code, clearing a matching selection.
    pub fn delete(&self, code: &str) {
        self.coupons
            .lock()
            .expect("coupon mutex poisoned")
            .retain(|c| c.code != code);

        let mut selected = self.selected.lock().expect("coupon mutex poisoned");
        if selected.as_ref().is_some_and(|c| c.code == code) {
            *selected = None;
        }
        drop(selected);

        debug!(%code, "coupon deleted");
        self.hub.success("Coupon deleted.");
    }

    /// Clears the selection without touching the collection.
    pub fn clear_selection(&self) {
        *self.selected.lock().expect("coupon mutex poisoned") = None;
    }

    /// The currently selected coupon, if any.
    pub fn selected(&self) -> Option<Coupon> {
        self.selected.lock().expect("coupon mutex poisoned").clone()
    }

    /// Returns all coupons.
    pub fn list(&self) -> Vec<Coupon> {
        self.coupons.lock().expect("coupon mutex poisoned").clone()
    }

    /// Replaces the whole collection (persistence load path).
    pub fn replace(&self, coupons: Vec<Coupon>) {
        *self.coupons.lock().expect("coupon mutex poisoned") = coupons;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CouponDiscount, Severity};

    fn amount_coupon(code: &str, value: i64) -> Coupon {
        Coupon {
            name: format!("{} off", value),
            code: code.to_string(),
            discount: CouponDiscount::Amount(value),
        }
    }

    fn percentage_coupon(code: &str, pct: u32) -> Coupon {
        Coupon {
            name: format!("{}% off", pct),
            code: code.to_string(),
            discount: CouponDiscount::Percentage(pct),
        }
    }

    fn store_with_hub() -> (CouponStore, NotificationHub) {
        let hub = NotificationHub::new();
        (CouponStore::new(hub.clone()), hub)
    }

    #[test]
    fn test_add_and_list() {
        let (store, _) = store_with_hub();
        store.add(amount_coupon("AMOUNT5000", 5_000)).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_duplicate_code_rejected_without_mutation() {
        let (store, hub) = store_with_hub();
        store.add(amount_coupon("AMOUNT5000", 5_000)).unwrap();

        let err = store.add(amount_coupon("AMOUNT5000", 9_999)).unwrap_err();

        assert!(matches!(err, EngineError::DuplicateCouponCode { .. }));
        let coupons = store.list();
        assert_eq!(coupons.len(), 1);
        assert_eq!(coupons[0].discount, CouponDiscount::Amount(5_000));
        assert_eq!(hub.snapshot().last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_add_rejects_malformed_coupon() {
        let (store, _) = store_with_hub();
        assert!(store.add(amount_coupon("", 5_000)).is_err());
        assert!(store.add(percentage_coupon("PCT", 101)).is_err());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_apply_selects_valid_coupon() {
        let (store, _) = store_with_hub();
        store
            .apply(percentage_coupon("PCT20", 20), Money::from_cents(10_000))
            .unwrap();
        assert_eq!(store.selected().unwrap().code, "PCT20");
    }

    #[test]
    fn test_apply_invalid_keeps_previous_selection() {
        let (store, hub) = store_with_hub();
        store
            .apply(amount_coupon("AMOUNT5000", 5_000), Money::from_cents(5_000))
            .unwrap();

        let err = store
            .apply(percentage_coupon("PCT20", 20), Money::from_cents(5_000))
            .unwrap_err();

        assert!(matches!(err, EngineError::CouponNotApplicable { .. }));
        assert_eq!(store.selected().unwrap().code, "AMOUNT5000");
        assert_eq!(hub.snapshot().last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_delete_selected_coupon_clears_selection() {
        let (store, _) = store_with_hub();
        store.add(amount_coupon("AMOUNT5000", 5_000)).unwrap();
        store
            .apply(amount_coupon("AMOUNT5000", 5_000), Money::from_cents(1_000))
            .unwrap();

        store.delete("AMOUNT5000");

        assert!(store.list().is_empty());
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_delete_other_coupon_keeps_selection() {
        let (store, _) = store_with_hub();
        store.add(amount_coupon("A", 1_000)).unwrap();
        store.add(amount_coupon("B", 2_000)).unwrap();
        store
            .apply(amount_coupon("A", 1_000), Money::from_cents(1_000))
            .unwrap();

        store.delete("B");

        assert_eq!(store.selected().unwrap().code, "A");
    }
}

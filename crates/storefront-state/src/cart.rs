//! # Cart Store
//!
//! Owns the cart lines and runs every mutation through the inventory
//! guard before committing.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  UI Action               Store Method            Cart Change        │
//! │  ─────────               ────────────            ───────────        │
//! │                                                                     │
//! │  Click product ────────► add_to_cart() ────────► insert/increment   │
//! │                            (guard: plan_add)      or NO change      │
//! │                                                                     │
//! │  Change quantity ──────► set_quantity() ───────► set/remove         │
//! │                            (guard: plan_set)      or NO change      │
//! │                                                                     │
//! │  Click remove ─────────► remove() ─────────────► line removed       │
//! │                                                                     │
//! │  Checkout ─────────────► complete_order() ─────► cart + coupon      │
//! │                                                   cleared together  │
//! │                                                                     │
//! │  NOTE: guard decision and commit happen under one lock hold, so     │
//! │  "read remaining stock, then commit" cannot race. Guard failures    │
//! │  notify the user and leave the cart untouched.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::debug;

use storefront_core::stock::{plan_add, plan_set_quantity, remaining_stock, AddPlan, QuantityPlan};
use storefront_core::{
    pricing, CartLine, CartTotals, Coupon, EngineResult, OrderConfirmation, Product,
};

use crate::catalog::CatalogStore;
use crate::coupons::CouponStore;
use crate::notify::NotificationHub;

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (re-adding increments the quantity)
/// - Every quantity is positive and within the product's stock
/// - Totals are recomputed from current state on every query
#[derive(Debug, Clone)]
pub struct CartStore {
    lines: Arc<Mutex<Vec<CartLine>>>,
    hub: NotificationHub,
}

impl CartStore {
    /// Creates an empty cart reporting into `hub`.
    pub fn new(hub: NotificationHub) -> Self {
        CartStore {
            lines: Arc::new(Mutex::new(Vec::new())),
            hub,
        }
    }

    /// Adds one unit of `product` to the cart.
    ///
    /// Fails without mutation when the product is out of stock or the
    /// increment would exceed stock; either way the user is notified.
    pub fn add_to_cart(&self, product: &Product) -> EngineResult<()> {
        let mut lines = self.lines.lock().expect("cart mutex poisoned");

        let plan = match plan_add(product, &lines) {
            Ok(plan) => plan,
            Err(err) => {
                debug!(product_id = %product.id, %err, "add_to_cart rejected");
                self.hub.error(err.to_string());
                return Err(err);
            }
        };

        match plan {
            AddPlan::Insert => lines.push(CartLine::new(product.clone(), 1)),
            AddPlan::Increment { new_quantity } => {
                if let Some(line) = lines.iter_mut().find(|l| l.product.id == product.id) {
                    line.quantity = new_quantity;
                }
            }
        }
        drop(lines);

        debug!(product_id = %product.id, "added to cart");
        self.hub.success("Added to cart.");
        Ok(())
    }

    /// Sets an explicit quantity for a product's line.
    ///
    /// Reads live stock from the catalog (snapshots may be stale). An id
    /// the catalog no longer knows is a silent no-op; a target of 0 or
    /// less removes the line; a target past stock fails without mutation.
    pub fn set_quantity(
        &self,
        catalog: &CatalogStore,
        product_id: &str,
        new_quantity: i64,
    ) -> EngineResult<()> {
        let Some(product) = catalog.get(product_id) else {
            debug!(product_id = %product_id, "set_quantity on unknown product ignored");
            return Ok(());
        };

        let plan = match plan_set_quantity(&product, new_quantity) {
            Ok(plan) => plan,
            Err(err) => {
                debug!(product_id = %product_id, %err, "set_quantity rejected");
                self.hub.error(err.to_string());
                return Err(err);
            }
        };

        let mut lines = self.lines.lock().expect("cart mutex poisoned");
        match plan {
            QuantityPlan::Remove => lines.retain(|l| l.product.id != product_id),
            QuantityPlan::Set { quantity } => {
                if let Some(line) = lines.iter_mut().find(|l| l.product.id == product_id) {
                    line.quantity = quantity;
                }
            }
        }

        Ok(())
    }

    /// Removes a product's line from the cart.
    pub fn remove(&self, product_id: &str) {
        self.lines
            .lock()
            .expect("cart mutex poisoned")
            .retain(|l| l.product.id != product_id);
    }

    /// Clears all lines.
    pub fn clear(&self) {
        self.lines.lock().expect("cart mutex poisoned").clear();
    }

    /// Returns a snapshot of the cart lines.
    pub fn lines(&self) -> Vec<CartLine> {
        self.lines.lock().expect("cart mutex poisoned").clone()
    }

    /// Total units across all lines (the cart badge number).
    pub fn total_item_count(&self) -> i64 {
        self.lines
            .lock()
            .expect("cart mutex poisoned")
            .iter()
            .map(|l| l.quantity)
            .sum()
    }

    /// Units of `product` still available given what the cart holds.
    pub fn remaining_stock(&self, product: &Product) -> i64 {
        let lines = self.lines.lock().expect("cart mutex poisoned");
        remaining_stock(product, &lines)
    }

    /// Aggregate totals for the current cart and coupon selection.
    ///
    /// Never cached: recomputed from the live cart on every call.
    pub fn totals(&self, selected_coupon: Option<&Coupon>) -> CartTotals {
        let lines = self.lines.lock().expect("cart mutex poisoned");
        pricing::cart_totals(&lines, selected_coupon)
    }

    /// Completes the order: clears the cart and the coupon selection
    /// atomically (both locks held across the clear), then reports the
    /// order number.
    pub fn complete_order(&self, coupons: &CouponStore) -> OrderConfirmation {
        let order_number = format!("ORD-{}", Utc::now().timestamp_millis());

        {
            let mut lines = self.lines.lock().expect("cart mutex poisoned");
            let mut selected = coupons.selected.lock().expect("coupon mutex poisoned");
            lines.clear();
            *selected = None;
        }

        debug!(%order_number, "order completed");
        self.hub
            .success(format!("Order completed. Order number: {}", order_number));

        OrderConfirmation { order_number }
    }

    /// Replaces the whole collection (persistence load path).
    pub fn replace(&self, lines: Vec<CartLine>) {
        *self.lines.lock().expect("cart mutex poisoned") = lines;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NewProduct;
    use storefront_core::{CouponDiscount, DiscountTier, EngineError, Severity};

    fn product(id: &str, price_cents: i64, stock: i64, discounts: Vec<DiscountTier>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: None,
            price_cents,
            stock,
            discounts,
        }
    }

    fn cart_with_hub() -> (CartStore, NotificationHub) {
        let hub = NotificationHub::new();
        (CartStore::new(hub.clone()), hub)
    }

    #[test]
    fn test_add_inserts_then_increments() {
        let (cart, _) = cart_with_hub();
        let p = product("1", 10_000, 5, vec![]);

        cart.add_to_cart(&p).unwrap();
        cart.add_to_cart(&p).unwrap();

        let lines = cart.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(cart.total_item_count(), 2);
    }

    #[test]
    fn test_add_out_of_stock_leaves_cart_unchanged() {
        let (cart, hub) = cart_with_hub();
        let p = product("1", 10_000, 0, vec![]);

        let err = cart.add_to_cart(&p).unwrap_err();

        assert_eq!(err, EngineError::OutOfStock);
        assert!(cart.lines().is_empty());
        assert_eq!(hub.snapshot().last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_add_past_stock_cap_leaves_cart_unchanged() {
        let (cart, hub) = cart_with_hub();
        let p = product("1", 10_000, 1, vec![]);

        cart.add_to_cart(&p).unwrap();
        let err = cart.add_to_cart(&p).unwrap_err();

        assert_eq!(err, EngineError::OutOfStock);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(hub.snapshot().last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let hub = NotificationHub::new();
        let catalog = CatalogStore::new(hub.clone());
        let cart = CartStore::new(hub);

        let p = catalog
            .add(NewProduct {
                name: "Mug".to_string(),
                description: None,
                price_cents: 5_000,
                stock: 5,
                discounts: vec![],
            })
            .unwrap();

        cart.add_to_cart(&p).unwrap();
        cart.set_quantity(&catalog, &p.id, 0).unwrap();

        assert!(cart.lines().is_empty());
    }

    #[test]
    fn test_set_quantity_past_stock_fails_with_cap() {
        let hub = NotificationHub::new();
        let catalog = CatalogStore::new(hub.clone());
        let cart = CartStore::new(hub);

        let p = catalog
            .add(NewProduct {
                name: "Mug".to_string(),
                description: None,
                price_cents: 5_000,
                stock: 5,
                discounts: vec![],
            })
            .unwrap();

        cart.add_to_cart(&p).unwrap();
        let err = cart.set_quantity(&catalog, &p.id, 6).unwrap_err();

        assert_eq!(err, EngineError::StockLimitExceeded { max: 5 });
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_unknown_product_is_noop() {
        let hub = NotificationHub::new();
        let catalog = CatalogStore::new(hub.clone());
        let cart = CartStore::new(hub.clone());

        cart.set_quantity(&catalog, "missing", 3).unwrap();

        assert!(cart.lines().is_empty());
        assert!(hub.snapshot().is_empty());
    }

    #[test]
    fn test_set_quantity_reads_live_stock_not_snapshot() {
        let hub = NotificationHub::new();
        let catalog = CatalogStore::new(hub.clone());
        let cart = CartStore::new(hub);

        let p = catalog
            .add(NewProduct {
                name: "Mug".to_string(),
                description: None,
                price_cents: 5_000,
                stock: 5,
                discounts: vec![],
            })
            .unwrap();
        cart.add_to_cart(&p).unwrap();

        // Restock after the snapshot was taken
        catalog
            .update(
                &p.id,
                crate::catalog::ProductPatch {
                    stock: Some(8),
                    ..Default::default()
                },
            )
            .unwrap();

        cart.set_quantity(&catalog, &p.id, 8).unwrap();
        assert_eq!(cart.lines()[0].quantity, 8);
    }

    #[test]
    fn test_totals_recomputed_per_call() {
        let (cart, _) = cart_with_hub();
        let p = product(
            "1",
            10_000,
            20,
            vec![DiscountTier {
                quantity: 3,
                rate_bps: 1000,
            }],
        );

        for _ in 0..3 {
            cart.add_to_cart(&p).unwrap();
        }

        let totals = cart.totals(None);
        assert_eq!(totals.before_discount_cents, 30_000);
        assert_eq!(totals.after_discount_cents, 27_000);

        cart.set_quantity(
            &CatalogStore::with_products(NotificationHub::new(), vec![p.clone()]),
            "1",
            2,
        )
        .unwrap();

        let totals = cart.totals(None);
        assert_eq!(totals.after_discount_cents, 20_000);
    }

    #[test]
    fn test_complete_order_clears_cart_and_selection() {
        let hub = NotificationHub::new();
        let cart = CartStore::new(hub.clone());
        let coupons = CouponStore::new(hub);

        let p = product("1", 10_000, 20, vec![]);
        for _ in 0..2 {
            cart.add_to_cart(&p).unwrap();
        }
        coupons
            .apply(
                Coupon {
                    name: "5,000 off".to_string(),
                    code: "AMOUNT5000".to_string(),
                    discount: CouponDiscount::Amount(5_000),
                },
                cart.totals(None).after_discount(),
            )
            .unwrap();
        assert!(coupons.selected().is_some());

        let confirmation = cart.complete_order(&coupons);

        assert!(confirmation.order_number.starts_with("ORD-"));
        assert!(cart.lines().is_empty());
        assert!(coupons.selected().is_none());
    }
}

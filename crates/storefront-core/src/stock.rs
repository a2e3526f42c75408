//! # Inventory Guard
//!
//! Stock-aware mutation decisions: whether adding one unit or setting a
//! new quantity is legal against remaining stock.
//!
//! ## Plan-then-Commit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Store layer                        Guard (this module)             │
//! │  ───────────                        ───────────────────             │
//! │                                                                     │
//! │  add_to_cart(product) ────────────► plan_add(product, cart)         │
//! │                                       │                             │
//! │       ┌───────────────────────────────┤                             │
//! │       ▼                               ▼                             │
//! │  apply plan                      Err(OutOfStock /                   │
//! │  (insert or increment)               StockLimitExceeded)            │
//! │                                                                     │
//! │  Either the whole mutation applies or nothing changes.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The guard itself is pure: it reads the cart, it never mutates it. The
//! store holds its lock across plan + commit so the sequence is atomic.

use crate::error::{EngineError, EngineResult};
use crate::types::{CartLine, Product};

/// How an add-to-cart request should be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPlan {
    /// Insert a new line at quantity 1.
    Insert,
    /// Increment the existing line to `new_quantity`.
    Increment { new_quantity: i64 },
}

/// How a set-quantity request should be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityPlan {
    /// Remove the line (target quantity was ≤ 0).
    Remove,
    /// Set the line to `quantity`.
    Set { quantity: i64 },
}

/// The product's stock minus the quantity already committed to the cart.
///
/// ## Example
/// ```rust
/// use storefront_core::stock::remaining_stock;
/// use storefront_core::{CartLine, Product};
///
/// let product = Product {
///     id: "p1".into(),
///     name: "Mug".into(),
///     description: None,
///     price_cents: 500,
///     stock: 5,
///     discounts: vec![],
/// };
/// let cart = vec![CartLine::new(product.clone(), 3)];
///
/// assert_eq!(remaining_stock(&product, &cart), 2);
/// ```
pub fn remaining_stock(product: &Product, cart: &[CartLine]) -> i64 {
    let in_cart = cart
        .iter()
        .find(|line| line.product.id == product.id)
        .map(|line| line.quantity)
        .unwrap_or(0);

    product.stock - in_cart
}

/// Decides whether one unit of `product` may be added to the cart.
///
/// - No remaining stock → `OutOfStock`
/// - Existing line whose increment would exceed stock →
///   `StockLimitExceeded { max: stock }`
/// - Otherwise `Insert` or `Increment`
pub fn plan_add(product: &Product, cart: &[CartLine]) -> EngineResult<AddPlan> {
    if remaining_stock(product, cart) <= 0 {
        return Err(EngineError::OutOfStock);
    }

    match cart.iter().find(|line| line.product.id == product.id) {
        Some(line) => {
            let new_quantity = line.quantity + 1;
            if new_quantity > product.stock {
                return Err(EngineError::StockLimitExceeded { max: product.stock });
            }
            Ok(AddPlan::Increment { new_quantity })
        }
        None => Ok(AddPlan::Insert),
    }
}

/// Decides how an explicit target quantity should be applied.
///
/// A non-positive target removes the line rather than setting a
/// non-positive quantity; a target past the product's stock is rejected
/// with the numeric cap.
pub fn plan_set_quantity(product: &Product, target: i64) -> EngineResult<QuantityPlan> {
    if target <= 0 {
        return Ok(QuantityPlan::Remove);
    }

    if target > product.stock {
        return Err(EngineError::StockLimitExceeded { max: product.stock });
    }

    Ok(QuantityPlan::Set { quantity: target })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: None,
            price_cents: 1_000,
            stock,
            discounts: vec![],
        }
    }

    #[test]
    fn test_remaining_stock_no_line() {
        let p = product("1", 5);
        assert_eq!(remaining_stock(&p, &[]), 5);
    }

    #[test]
    fn test_remaining_stock_with_line() {
        let p = product("1", 5);
        let cart = vec![CartLine::new(p.clone(), 4)];
        assert_eq!(remaining_stock(&p, &cart), 1);
    }

    #[test]
    fn test_plan_add_inserts_new_line() {
        let p = product("1", 5);
        assert_eq!(plan_add(&p, &[]).unwrap(), AddPlan::Insert);
    }

    #[test]
    fn test_plan_add_increments_existing_line() {
        let p = product("1", 5);
        let cart = vec![CartLine::new(p.clone(), 2)];
        assert_eq!(
            plan_add(&p, &cart).unwrap(),
            AddPlan::Increment { new_quantity: 3 }
        );
    }

    #[test]
    fn test_plan_add_out_of_stock() {
        let p = product("1", 0);
        assert_eq!(plan_add(&p, &[]).unwrap_err(), EngineError::OutOfStock);

        // Also out of stock when the cart holds the last unit
        let p = product("2", 3);
        let cart = vec![CartLine::new(p.clone(), 3)];
        assert_eq!(plan_add(&p, &cart).unwrap_err(), EngineError::OutOfStock);
    }

    #[test]
    fn test_plan_set_quantity_within_stock() {
        let p = product("1", 5);
        assert_eq!(
            plan_set_quantity(&p, 5).unwrap(),
            QuantityPlan::Set { quantity: 5 }
        );
    }

    #[test]
    fn test_plan_set_quantity_past_stock_reports_cap() {
        let p = product("1", 5);
        assert_eq!(
            plan_set_quantity(&p, 6).unwrap_err(),
            EngineError::StockLimitExceeded { max: 5 }
        );
    }

    #[test]
    fn test_plan_set_quantity_zero_or_negative_removes() {
        let p = product("1", 5);
        assert_eq!(plan_set_quantity(&p, 0).unwrap(), QuantityPlan::Remove);
        assert_eq!(plan_set_quantity(&p, -3).unwrap(), QuantityPlan::Remove);
    }
}

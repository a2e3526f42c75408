//! # Seed Data
//!
//! The defined initial dataset: used as the persistence fallback when no
//! stored state exists (or it fails to parse), and by the demo binary.

use storefront_core::{Coupon, CouponDiscount, DiscountTier, Product};

/// Initial product catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            name: "Classic T-Shirt".to_string(),
            description: Some("Soft cotton tee in plain colors".to_string()),
            price_cents: 10_000,
            stock: 20,
            discounts: vec![
                DiscountTier {
                    quantity: 10,
                    rate_bps: 1000,
                },
                DiscountTier {
                    quantity: 20,
                    rate_bps: 2000,
                },
            ],
        },
        Product {
            id: "p2".to_string(),
            name: "Canvas Tote Bag".to_string(),
            description: Some("Everyday carry, holds a 15\" laptop".to_string()),
            price_cents: 20_000,
            stock: 20,
            discounts: vec![DiscountTier {
                quantity: 10,
                rate_bps: 1500,
            }],
        },
        Product {
            id: "p3".to_string(),
            name: "Insulated Bottle".to_string(),
            description: Some("Keeps drinks cold for 24 hours".to_string()),
            price_cents: 30_000,
            stock: 20,
            discounts: vec![
                DiscountTier {
                    quantity: 10,
                    rate_bps: 2000,
                },
                DiscountTier {
                    quantity: 30,
                    rate_bps: 2500,
                },
            ],
        },
    ]
}

/// Initial coupon list.
pub fn seed_coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            name: "5,000 off".to_string(),
            code: "AMOUNT5000".to_string(),
            discount: CouponDiscount::Amount(5_000),
        },
        Coupon {
            name: "10% off".to_string(),
            code: "PERCENT10".to_string(),
            discount: CouponDiscount::Percentage(10),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::validation::{
        validate_coupon_code, validate_coupon_discount, validate_discount_tiers,
        validate_price_cents, validate_product_name, validate_stock,
    };

    #[test]
    fn test_seed_products_are_well_formed() {
        let products = seed_products();
        assert!(!products.is_empty());

        for product in &products {
            validate_product_name(&product.name).unwrap();
            validate_price_cents(product.price_cents).unwrap();
            validate_stock(product.stock).unwrap();
            validate_discount_tiers(&product.discounts).unwrap();
        }

        let mut ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_coupons_are_well_formed() {
        let coupons = seed_coupons();
        assert!(!coupons.is_empty());

        for coupon in &coupons {
            validate_coupon_code(&coupon.code).unwrap();
            validate_coupon_discount(&coupon.discount).unwrap();
        }
    }
}

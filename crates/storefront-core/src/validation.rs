//! # Validation Module
//!
//! Form-input validation for catalog and coupon mutations.
//!
//! The stores call these before mutating, so the pricing calculators only
//! ever see well-formed records. Malformed persisted state never reaches
//! the engine either - the persistence collaborator falls back to the
//! seed dataset on parse failure.

use crate::error::ValidationError;
use crate::types::{CouponDiscount, DiscountTier};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Mechanical Keyboard").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a price in minor units.
///
/// Zero is allowed (free items); negative prices are not.
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level. Zero means sold out, never negative.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a product's quantity-discount table.
///
/// ## Rules
/// - Tier thresholds must be positive
/// - Tier rates must be below 100% (10000 bps)
pub fn validate_discount_tiers(tiers: &[DiscountTier]) -> ValidationResult<()> {
    for tier in tiers {
        if tier.quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "discount quantity".to_string(),
            });
        }

        if tier.rate_bps >= 10_000 {
            return Err(ValidationError::OutOfRange {
                field: "discount rate".to_string(),
                min: 0,
                max: 9_999,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Coupon Validators
// =============================================================================

/// Validates a coupon code.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 20 characters
/// - Uppercase letters, digits, hyphens, underscores only
pub fn validate_coupon_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: 20,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only uppercase letters, digits, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates a coupon's discount value.
///
/// ## Rules
/// - Amount: non-negative minor units
/// - Percentage: whole percent in 0..=100
pub fn validate_coupon_discount(discount: &CouponDiscount) -> ValidationResult<()> {
    match discount {
        CouponDiscount::Amount(value) => {
            if *value < 0 {
                return Err(ValidationError::MustBeNonNegative {
                    field: "discount value".to_string(),
                });
            }
        }
        CouponDiscount::Percentage(pct) => {
            if *pct > 100 {
                return Err(ValidationError::OutOfRange {
                    field: "discount value".to_string(),
                    min: 0,
                    max: 100,
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Search Validators
// =============================================================================

/// Validates a search query.
///
/// Can be empty (returns all results); maximum 100 characters.
/// Returns the trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Mechanical Keyboard").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(10_000).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(50).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_discount_tiers() {
        let good = vec![DiscountTier {
            quantity: 3,
            rate_bps: 1000,
        }];
        assert!(validate_discount_tiers(&good).is_ok());

        let zero_threshold = vec![DiscountTier {
            quantity: 0,
            rate_bps: 1000,
        }];
        assert!(validate_discount_tiers(&zero_threshold).is_err());

        let full_rate = vec![DiscountTier {
            quantity: 3,
            rate_bps: 10_000,
        }];
        assert!(validate_discount_tiers(&full_rate).is_err());
    }

    #[test]
    fn test_validate_coupon_code() {
        assert!(validate_coupon_code("WELCOME10").is_ok());
        assert!(validate_coupon_code("SUMMER_SALE-1").is_ok());

        assert!(validate_coupon_code("").is_err());
        assert!(validate_coupon_code("lowercase").is_err());
        assert!(validate_coupon_code("HAS SPACE").is_err());
        assert!(validate_coupon_code(&"A".repeat(30)).is_err());
    }

    #[test]
    fn test_validate_coupon_discount() {
        assert!(validate_coupon_discount(&CouponDiscount::Amount(0)).is_ok());
        assert!(validate_coupon_discount(&CouponDiscount::Amount(-1)).is_err());
        assert!(validate_coupon_discount(&CouponDiscount::Percentage(100)).is_ok());
        assert!(validate_coupon_discount(&CouponDiscount::Percentage(101)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  mug ").unwrap(), "mug");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(150)).is_err());
    }
}

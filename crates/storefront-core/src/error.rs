//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  storefront-core errors (this file)                                 │
//! │  ├── EngineError      - Guard / store rule violations               │
//! │  └── ValidationError  - Form-input validation failures              │
//! │                                                                     │
//! │  Every variant is a recoverable-by-the-caller validation outcome:   │
//! │  it surfaces as a user-visible notification and leaves state        │
//! │  unchanged. The pure calculators (discount, pricing, coupon apply)  │
//! │  are total functions and never return errors.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, cap, id)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Engine Error
// =============================================================================

/// Storefront engine rule violations.
///
/// These errors represent guard or store rule failures. They should be
/// caught and translated to user-facing notifications; none of them is a
/// fatal fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No remaining stock for the product: the cart already holds every
    /// available unit.
    #[error("Out of stock")]
    OutOfStock,

    /// The requested quantity would exceed the product's stock.
    /// `max` is the numeric cap to report to the user.
    #[error("Only {max} in stock")]
    StockLimitExceeded { max: i64 },

    /// A coupon with this code already exists; duplicate adds are
    /// rejected, never overwritten.
    #[error("Coupon code '{code}' already exists")]
    DuplicateCouponCode { code: String },

    /// The coupon failed validation against the current cart total.
    #[error("Coupon not applicable: {reason}")]
    CouponNotApplicable { reason: String },

    /// Product id does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form-input validation errors.
///
/// These occur when catalog or coupon form input doesn't meet
/// requirements; used for early validation before store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. bad characters in a coupon code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::StockLimitExceeded { max: 7 };
        assert_eq!(err.to_string(), "Only 7 in stock");

        let err = EngineError::DuplicateCouponCode {
            code: "WELCOME10".to_string(),
        };
        assert_eq!(err.to_string(), "Coupon code 'WELCOME10' already exists");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_engine_error() {
        let validation_err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        let engine_err: EngineError = validation_err.into();
        assert!(matches!(engine_err, EngineError::Validation(_)));
    }
}

//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CartError        - Outcome of a cart operation                    │
//! │  └── ValidationError  - Line item rejected at insertion                │
//! │                                                                         │
//! │  shopcart-api errors (app crate)                                       │
//! │  └── ApiError         - What HTTP clients see (status + body)          │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → ApiError → HTTP response          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `CartError::EmptyCart` is not a failure in the usual sense. Total and
//! checkout both report an empty cart through it, and the HTTP layer turns it
//! into a 404 with no body.

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Errors returned by [`crate::CartService`] operations.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// The cart holds no items.
    ///
    /// ## When This Occurs
    /// - `total_price()` on a fresh or just-checked-out cart
    /// - `checkout()` on an empty cart (the cart stays empty)
    #[error("Cart is empty")]
    EmptyCart,

    /// The candidate line item failed validation; the cart is unchanged.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Line item validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Floating-point value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

//! # shopcart-core: Pure Cart Logic
//!
//! This crate holds everything the cart endpoint actually decides: what a
//! line item is, when one may enter the cart, how the total is computed and
//! what checkout does. The HTTP layer in `shopcart-api` only translates.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopCart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shopcart-api (axum handlers)                    │   │
//! │  │    POST /api/cart/add ─ GET /api/cart/total ─ POST .../checkout │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shopcart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │  service  │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Cart    │  │CartService│  │  policy   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `LineItem` domain type
//! - [`cart`] - The ordered item sequence and its math
//! - [`service`] - `CartService`, the mutex-guarded owner of the cart
//! - [`validation`] - Line item validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{CartService, LineItem};
//!
//! let service = CartService::new();
//! service.add_to_cart(LineItem::new("Product1", 10.99, 2)).unwrap();
//! service.add_to_cart(LineItem::new("Product2", 5.49, 3)).unwrap();
//!
//! let total = service.total_price().unwrap();
//! assert!((total - 38.45).abs() < 0.001);
//!
//! service.checkout().unwrap();
//! assert!(service.total_price().is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CartError, CartResult, ValidationError};
pub use service::{CartService, CheckoutSummary};
pub use types::LineItem;
pub use validation::ValidationPolicy;

// =============================================================================
// Response Messages
// =============================================================================
// Clients match on these strings, so they are part of the wire contract.

/// Body returned when an item is accepted into the cart.
pub const ADD_SUCCESS_MESSAGE: &str = "Product added to the cart successfully.";

/// Body returned when an add request is rejected.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload or missing required fields.";

/// Body returned when checkout empties the cart.
pub const CHECKOUT_SUCCESS_MESSAGE: &str = "Cart checked out successfully.";

//! # Cart Service
//!
//! Owns the cart and exposes the three cart operations.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Service Operations                              │
//! │                                                                         │
//! │  Operation          Empty cart              Non-empty cart              │
//! │  ─────────          ──────────              ──────────────              │
//! │                                                                         │
//! │  add_to_cart()      validate, push          validate, push              │
//! │                                                                         │
//! │  total_price()      Err(EmptyCart)          Ok(Σ price × qty)           │
//! │                                                                         │
//! │  checkout()         Err(EmptyCart), no-op   Ok(summary), cart emptied   │
//! │                                                                         │
//! │  NOTE: Every operation holds the Mutex for its whole duration, so the   │
//! │        three operations are atomic with respect to each other.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The cart lives behind a `std::sync::Mutex`. No operation awaits or does
//! I/O while holding the lock. The HTTP layer shares one service through an
//! `Arc`; tests construct their own.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::cart::Cart;
use crate::error::{CartError, CartResult, ValidationError};
use crate::types::LineItem;
use crate::validation::ValidationPolicy;

/// What a successful checkout removed from the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    /// When the checked-out cart was started.
    pub opened_at: DateTime<Utc>,
    pub item_count: usize,
    pub total_price: f64,
    pub items: Vec<LineItem>,
}

/// The cart and the rules for changing it.
#[derive(Debug, Default)]
pub struct CartService {
    cart: Mutex<Cart>,
    policy: ValidationPolicy,
}

impl CartService {
    /// Creates a service with an empty cart and lenient validation.
    pub fn new() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }

    /// Creates a service with an empty cart and the given validation policy.
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        CartService {
            cart: Mutex::new(Cart::new()),
            policy,
        }
    }

    /// Validates `item` and appends it to the cart.
    ///
    /// On validation failure the cart is left untouched. Under either policy
    /// an item is also refused when it would push the cart total past the
    /// range of `f64`, so [`CartService::total_price`] is always finite.
    pub fn add_to_cart(&self, item: LineItem) -> CartResult<()> {
        if let Err(e) = self.policy.validate(&item) {
            warn!(error = %e, "Rejected line item");
            return Err(CartError::Validation(e));
        }

        debug!(
            name = %item.name,
            unit_price = item.unit_price,
            quantity = item.quantity,
            "Adding line item"
        );
        self.with_cart_mut(|cart| {
            if !(cart.total_price() + item.line_total()).is_finite() {
                let e = ValidationError::NotFinite {
                    field: "total".to_string(),
                };
                warn!(error = %e, "Rejected line item");
                return Err(CartError::Validation(e));
            }
            cart.push(item);
            Ok(())
        })
    }

    /// Sum of unit price × quantity over the cart.
    ///
    /// ## Returns
    /// - `Ok(total)` when the cart has items
    /// - `Err(CartError::EmptyCart)` otherwise
    pub fn total_price(&self) -> CartResult<f64> {
        self.with_cart(|cart| {
            if cart.is_empty() {
                return Err(CartError::EmptyCart);
            }
            Ok(cart.total_price())
        })
    }

    /// Empties the cart.
    ///
    /// Checking out an empty cart changes nothing and reports `EmptyCart`.
    pub fn checkout(&self) -> CartResult<CheckoutSummary> {
        let summary = self.with_cart_mut(|cart| {
            if cart.is_empty() {
                return Err(CartError::EmptyCart);
            }
            let opened_at = cart.created_at();
            let total_price = cart.total_price();
            let items = cart.take_all();
            Ok(CheckoutSummary {
                opened_at,
                item_count: items.len(),
                total_price,
                items,
            })
        })?;

        info!(
            opened_at = %summary.opened_at,
            item_count = summary.item_count,
            total_price = summary.total_price,
            "Cart checked out"
        );
        Ok(summary)
    }

    /// Snapshot of the current items in insertion order.
    pub fn items(&self) -> Vec<LineItem> {
        self.with_cart(|cart| cart.items().to_vec())
    }

    /// Number of entries in the cart.
    pub fn len(&self) -> usize {
        self.with_cart(Cart::len)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.with_cart(Cart::is_empty)
    }

    /// Executes a function with read access to the cart.
    fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        // Every mutation is a single push or take, so a poisoned cart is still consistent.
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

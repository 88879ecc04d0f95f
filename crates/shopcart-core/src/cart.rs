//! # Cart
//!
//! The ordered sequence of line items pending checkout.
//!
//! ## Invariants
//! - Insertion order is preserved
//! - Duplicates are allowed (same name twice = two entries)
//! - Items are only ever appended or all removed at once
//!
//! `Cart` itself does not validate; [`crate::CartService`] validates before
//! calling [`Cart::push`].

use chrono::{DateTime, Utc};

use crate::types::LineItem;

/// The shopping cart.
#[derive(Debug, Clone)]
pub struct Cart {
    /// Items in insertion order
    items: Vec<LineItem>,

    /// When the cart was created/last emptied
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends an item to the end of the cart.
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Removes and returns every item, leaving the cart empty.
    pub fn take_all(&mut self) -> Vec<LineItem> {
        self.created_at = Utc::now();
        std::mem::take(&mut self.items)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// When the cart was created or last emptied.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the number of entries in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ unit price × quantity over all items. Zero for an empty cart.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

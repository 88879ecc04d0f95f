//! # HTTP Handlers
//!
//! ## Handler Categories
//! - [`cart`]: add item, total price, checkout, list items
//! - [`health`]: liveness probe

pub mod cart;
pub mod health;

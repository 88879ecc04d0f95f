//! # Application State
//!
//! Shared state handed to every axum handler.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  Router::with_state(app_state)                                          │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  ┌──────────────────────┐                                               │
//! │  │      AppState        │   Clone = Arc clone, every handler sees       │
//! │  │  cart: Arc<          │   the same CartService                        │
//! │  │    CartService>      │                                               │
//! │  └──────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use shopcart_core::{CartService, ValidationPolicy};

/// State shared by all handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub cart: Arc<CartService>,
}

impl AppState {
    /// Creates state around an empty cart with the given validation policy.
    pub fn new(policy: ValidationPolicy) -> Self {
        AppState {
            cart: Arc::new(CartService::with_policy(policy)),
        }
    }
}

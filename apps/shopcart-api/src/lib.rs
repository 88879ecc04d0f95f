//! # ShopCart API
//!
//! HTTP front end for the in-memory shopping cart.
//!
//! ## Module Organization
//! ```text
//! shopcart_api/
//! ├── lib.rs          ◄─── You are here (tracing setup, re-exports)
//! ├── config.rs       ◄─── ApiConfig: defaults → TOML → env
//! ├── error.rs        ◄─── ApiError → status + body
//! ├── state.rs        ◄─── AppState (Arc<CartService>)
//! ├── server.rs       ◄─── Router + graceful shutdown
//! └── handlers/
//!     ├── cart.rs     ◄─── add / total / checkout / list
//!     └── health.rs   ◄─── liveness
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `SHOPCART_CONFIG` - Path to a TOML config file
//! - `SHOPCART_BIND_ADDR` - Bind address (default: 0.0.0.0)
//! - `SHOPCART_PORT` - HTTP port (default: 8080)
//! - `SHOPCART_LOG_LEVEL` - Default log filter (default: info)
//! - `SHOPCART_VALIDATION` - `lenient` or `strict` (default: lenient)
//! - `RUST_LOG` - Overrides the log filter entirely

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

use tracing_subscriber::EnvFilter;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use server::{router, serve};
pub use state::AppState;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

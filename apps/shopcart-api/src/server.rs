//! # HTTP Server
//!
//! Builds the axum router and runs it until a shutdown signal arrives.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/cart/add       ──► handlers::cart::add_to_cart              │
//! │  GET  /api/cart/total     ──► handlers::cart::get_total_price          │
//! │  POST /api/cart/checkout  ──► handlers::cart::checkout                 │
//! │  GET  /api/cart           ──► handlers::cart::get_cart                 │
//! │  GET  /health             ──► handlers::health::health_handler         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ApiConfig;
use crate::handlers::{cart, health};
use crate::state::AppState;

/// Builds the router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/cart", get(cart::get_cart))
        .route("/api/cart/add", post(cart::add_to_cart))
        .route("/api/cart/total", get(cart::get_total_price))
        .route("/api/cart/checkout", post(cart::checkout))
        .route("/health", get(health::health_handler))
        .with_state(state)
}

/// Binds to the configured address and serves until Ctrl+C or SIGTERM.
pub async fn serve(config: &ApiConfig, state: AppState) -> std::io::Result<()> {
    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, validation = %config.validation, "HTTP server started");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

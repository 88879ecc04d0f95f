//! # ShopCart API Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration (defaults → `SHOPCART_CONFIG` file → env)
//! 2. Initialize tracing
//! 3. Create the cart service
//! 4. Serve HTTP until Ctrl+C / SIGTERM

use std::path::PathBuf;

use shopcart_api::config::CONFIG_PATH_ENV;
use shopcart_api::{init_tracing, serve, ApiConfig, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let config = ApiConfig::load(config_path)?;

    init_tracing(&config.log_level);
    info!(
        addr = %config.bind_address(),
        validation = %config.validation,
        "Starting ShopCart API server..."
    );

    let state = AppState::new(config.validation);
    serve(&config, state).await?;

    Ok(())
}

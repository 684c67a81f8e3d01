//! Products API - REST server

use axum_helpers::server::create_production_app;
use core_config::load_dotenv;
use core_config::tracing::{init_tracing, install_color_eyre};
use products_api::{AppState, Config};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let dotenv_loaded = load_dotenv();
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if dotenv_loaded {
        info!("Loaded environment from .env");
    }

    let state = AppState::new(config);
    let app = products_api::app(&state).await?;

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let products = state.products.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            match products.product_count().await {
                Ok(count) => info!(products = count, "Discarding in-memory product store"),
                Err(e) => tracing::warn!("Could not read final store size: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}

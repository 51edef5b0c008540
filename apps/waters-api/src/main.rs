//! Waters API - read-only catalog of bottled mineral waters

use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_waters::Catalog;
use std::sync::Arc;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let catalog = Arc::new(Catalog::seed());
    info!("Catalog loaded with {} products", catalog.len());

    let state = AppState {
        config: config.clone(),
        catalog,
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(state.config.app));

    info!("Starting Waters API on port {}", state.config.server.port);

    // Run server with graceful shutdown
    create_app(app, &state.config.server).await?;

    info!("Waters API shutdown complete");
    Ok(())
}

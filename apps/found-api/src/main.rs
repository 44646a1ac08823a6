use std::sync::Arc;

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_lostfound::{CachedEmbedder, RedisReportIndex, RemoteEmbedder, SearchService};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;
mod ui;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // .env first so Config::from_env sees it (the original demo did the same
    // with python-dotenv)
    dotenvy::dotenv().ok();

    // Install color-eyre before any fallible operations for colored errors
    install_color_eyre();

    // Load configuration from environment variables; missing required values
    // abort here, before the UI ever becomes interactive
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // Connect to Redis with startup retry; the PING inside connect() is the
    // initial connectivity check
    let redis = database::redis::connect_from_config_with_retry(config.redis.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("Redis connection failed: {}", e))?;

    // Embedding provider behind a bounded memo
    let remote = RemoteEmbedder::new(config.embedding.clone())
        .map_err(|e| eyre::eyre!("Failed to build embedding client: {}", e))?;
    let embedder = Arc::new(CachedEmbedder::new(remote, config.embedding.cache_size));

    let index = Arc::new(
        RedisReportIndex::new(redis.clone(), config.index.name.clone())
            .with_dimensions(config.embedding.dimensions),
    );

    let service = SearchService::new(embedder, index).with_k(config.index.k);

    let state = AppState {
        config,
        redis,
        service,
    };

    // Build router with API routes (state applied per route group)
    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge the demo page and health endpoints
    // - /: the demo UI
    // - /health: liveness with app name/version
    // - /ready: readiness with an actual Redis health check
    let app = router
        .merge(ui::router())
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        index = %state.config.index.name,
        "Starting found-api"
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("found-api shutdown complete");
    Ok(())
}

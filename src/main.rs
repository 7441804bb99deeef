use chrono::Utc;
use tracing_subscriber::EnvFilter;

use glintly_feed::{
    api::{create_router, AppState},
    config::Config,
    services::Catalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let catalog = Catalog::demo();
    tracing::info!(videos = catalog.len(), "Catalog loaded");

    let state = AppState::new(catalog, config.feed_settings());
    if config.seed_demo_data {
        state.seed_demo_library(Utc::now()).await?;
    }

    let app = create_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

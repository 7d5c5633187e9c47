//! Shelf Web - server-rendered front end for the book API

use anyhow::Result;
use shelf_core::ShelfConfig;
use shelf_web::{routes, state};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_web=debug,shelf_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ShelfConfig::from_env()?;

    // Create application state
    let state = state::AppState::from_config(&config).await?;

    // Build router
    let app = routes::create_router(state);

    // Start server
    tracing::info!("Starting server on {}", config.bind);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

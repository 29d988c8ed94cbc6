//! bookmarkd server binary.
//!
//! Bootstraps tracing, opens the database and serves the bookmark API.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookmarkd::api::create_router;
use bookmarkd::config::ServerConfig;
use bookmarkd::database::Database;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let config = ServerConfig::from_env();
    info!("loaded configuration: {:?}", config);

    let db = Arc::new(Database::open(&config.db_path)?);
    info!("database ready at {}", config.db_path);

    let app = create_router(db);

    let listener = TcpListener::bind(&config.addr).await?;
    info!("listening on http://{}", config.addr);
    info!("  health check: http://{}/health", config.addr);
    info!("  bookmarks API: http://{}/api/bookmarks", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookmarkd=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| format!("failed to initialize tracing: {}", e))?;

    Ok(())
}

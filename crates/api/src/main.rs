//! Well-Site Alert Pipeline - Main Entry Point

use std::sync::Arc;

use api::{create_router, init_logging, AppState};
use processor::{AlertProcessor, ProcessorConfig};
use settings::{Environment, Settings};
use storage::SqliteRepository;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration failures are fatal before any alert is touched.
    let settings = Settings::from_env()?;

    let level = match settings.env {
        Environment::Prod => Level::INFO,
        Environment::Dev | Environment::Test => Level::DEBUG,
    };
    init_logging(level);

    info!("=== Well-Site Alert Pipeline v{} ===", env!("CARGO_PKG_VERSION"));
    info!(env = %settings.env, "starting alert ingestion service");

    let repository = SqliteRepository::connect(&settings.database_url).await?;
    repository.init_schema().await?;

    let processor = AlertProcessor::new(repository, ProcessorConfig::default());
    let state = Arc::new(AppState::new(processor, settings.api_token));

    let addr = "0.0.0.0:8080";
    info!("starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}

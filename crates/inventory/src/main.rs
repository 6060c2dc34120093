use anyhow::{Context, Result};
use dotenv::dotenv;
use inventory::{config::Config, handler::AppRouter, state::AppState};
use shared::utils::init_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("inventory", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let state = AppState::new();

    info!("🚀 Starting inventory service");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}

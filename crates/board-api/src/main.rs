//! Comment board API server entry point
//!
//! Run with:
//! ```bash
//! DATABASE_URL=postgres://localhost/board cargo run -p board-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use board_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    let tracing_config = TracingConfig::for_environment(Environment::from_env());
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting comment board API server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    board_api::run(config).await?;

    Ok(())
}

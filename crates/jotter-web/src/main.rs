// Jotter server - HTTP API and browser UI for notes

use jotter_core::AppConfig;
use jotter_web::start_server;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Exit codes for different scenarios
mod exit_codes {
    pub const CONFIG_ERROR: i32 = 1;
    pub const SERVER_ERROR: i32 = 2;
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Starting jotter v{}", env!("CARGO_PKG_VERSION"));

    // The store path is a startup precondition; refuse to run without it.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(exit_codes::CONFIG_ERROR);
        }
    };

    if let Err(e) = start_server(&config).await {
        error!("Server error: {}", e);
        process::exit(exit_codes::SERVER_ERROR);
    }
}

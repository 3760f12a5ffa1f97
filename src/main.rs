//! Charcat viewer: interactive terminal browser for the character catalog.
//!
//! Loads configuration, wires the HTTP source into a shared query client
//! and hands control to the prompt loop in [`viewer`].

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use charcat_core::config::AppConfig;
use charcat_core::error::AppError;
use charcat_gateway::HttpCharacterSource;
use charcat_service::QueryClient;

mod viewer;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Viewer error: {}", e);
        eprintln!("✗ {}", e.message);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("CHARCAT_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    AppConfig::load(&config_path)
        .map_err(|e| AppError::configuration(format!("Config load error: {}", e)))
}

/// Initialize tracing/logging. Logs go to stderr so they never interleave
/// with the rendered screens.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        api = %config.api.base_url,
        "Starting Charcat viewer v{}",
        env!("CARGO_PKG_VERSION")
    );

    let source = Arc::new(HttpCharacterSource::new(&config.api)?);
    let client = Arc::new(QueryClient::new(source, &config.query));

    viewer::Viewer::new(client)
        .run(&config.viewer.initial_route)
        .await?;

    tracing::info!("Viewer closed");
    Ok(())
}

//! CLI command definitions and dispatch.

pub mod config;
pub mod list;
pub mod route;
pub mod show;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use charcat_core::config::AppConfig;
use charcat_core::error::AppError;
use charcat_gateway::HttpCharacterSource;
use charcat_service::QueryClient;

/// Charcat: browse the Rick and Morty character catalog
#[derive(Debug, Parser)]
#[command(name = "charcat", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List characters, loading pages like an infinite scroll
    List(list::ListArgs),
    /// Show one character
    Show(show::ShowArgs),
    /// Resolve a viewer path to its screen
    Route(route::RouteArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::List(args) => list::execute(args, &self.config, self.format).await,
            Commands::Show(args) => show::execute(args, &self.config, self.format).await,
            Commands::Route(args) => route::execute(args, self.format),
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: build the HTTP-backed query client from config
pub fn create_client(config: &AppConfig) -> Result<Arc<QueryClient<HttpCharacterSource>>, AppError> {
    let source = HttpCharacterSource::new(&config.api)?;
    Ok(Arc::new(QueryClient::new(Arc::new(source), &config.query)))
}

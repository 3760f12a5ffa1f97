//! Route resolution command.

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use charcat_core::error::AppError;
use charcat_service::Route;

/// Arguments for the route command
#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Path to resolve, e.g. `/character/1`
    pub path: String,
}

/// Resolved route for JSON output
#[derive(Debug, Serialize)]
struct RouteInfo {
    /// Path as given
    requested: String,
    /// Canonical path after redirects
    path: String,
    /// Screen name
    screen: &'static str,
    /// Character ID for detail screens
    id: Option<String>,
}

/// Execute the route command
pub fn execute(args: &RouteArgs, format: OutputFormat) -> Result<(), AppError> {
    let route = Route::resolve(&args.path)?;
    let info = RouteInfo {
        requested: args.path.clone(),
        path: route.path(),
        screen: match &route {
            Route::Characters => "list",
            Route::Character { .. } => "detail",
        },
        id: route.character_id().map(str::to_string),
    };

    match format {
        OutputFormat::Table => {
            output::print_kv("Path", &info.path);
            output::print_kv("Screen", info.screen);
            if let Some(id) = &info.id {
                output::print_kv("Character", id);
            }
        }
        OutputFormat::Json => output::print_item(&info, format),
    }
    Ok(())
}

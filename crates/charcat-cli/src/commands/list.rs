//! Character listing command.

use clap::Args;
use tracing::debug;

use crate::output::{self, OutputFormat};
use charcat_core::error::AppError;
use charcat_service::{ListSession, ListState};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Number of pages to load
    #[arg(short, long, default_value_t = 1)]
    pub pages: u32,

    /// Load every page
    #[arg(short, long, conflicts_with = "pages")]
    pub all: bool,

    /// Only show characters whose name contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Execute the list command
pub async fn execute(
    args: &ListArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    if args.pages == 0 && !args.all {
        return Err(AppError::validation("--pages must be at least 1"));
    }

    let config = super::load_config(config_path)?;
    let client = super::create_client(&config)?;
    let mut session = ListSession::new(client);

    session.start();
    let mut state = session.settle().await;
    let mut loaded_pages = 1;

    while matches!(state, ListState::Populated { has_more: true })
        && (args.all || loaded_pages < args.pages)
    {
        // Scroll the sentinel out of view and back in.
        session.set_sentinel_visible(false);
        if session.set_sentinel_visible(true).is_none() {
            break;
        }
        state = session.settle().await;
        loaded_pages += 1;
        debug!(loaded_pages, %state, "Page loaded");
    }

    if let Some(term) = &args.search {
        session.set_search(term.as_str());
    }

    let snapshot = session.controller().snapshot();
    if snapshot.state == ListState::Errored && snapshot.loaded == 0 {
        let message = snapshot
            .banner
            .unwrap_or("Failed to load characters. Please try again later.");
        return Err(AppError::fetch(message));
    }

    output::print_characters(&snapshot.items, format);

    if format == OutputFormat::Table {
        if let Some(banner) = snapshot.banner {
            output::print_warning(banner);
        }
        let total = snapshot
            .total
            .map(|total| total.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "Showing {} of {} loaded ({} total)",
            snapshot.items.len(),
            snapshot.loaded,
            total
        );
        if snapshot.state.is_exhausted() && snapshot.loaded > 0 {
            println!("No more characters");
        }
    }

    Ok(())
}

//! Character detail command.

use clap::Args;

use crate::output::{self, OutputFormat};
use charcat_cache::QueryState;
use charcat_core::error::AppError;
use charcat_service::DetailResolver;

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Character ID
    pub id: String,
}

/// Execute the show command
pub async fn execute(
    args: &ShowArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let resolver = DetailResolver::new(super::create_client(&config)?);

    match resolver.resolve(Some(&args.id)).await {
        QueryState::Success(character) => {
            output::print_character(&character, format);
            Ok(())
        }
        QueryState::Error(err) => Err(err),
        QueryState::Idle | QueryState::Pending => {
            Err(AppError::validation("Character id must not be empty"))
        }
    }
}

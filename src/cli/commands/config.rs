//! Show-config command - print the effective configuration

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Execute the show-config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();

    match format {
        OutputFormat::Human => {
            output::print_header("Configuration");
            println!("  Catalog index: {}", config.catalog.index_path.display());
            match &config.catalog.vocabulary_path {
                Some(path) => println!("  Vocabulary: {}", path.display()),
                None => println!("  Vocabulary: {}", colors::dim("not configured")),
            }
            println!("  Default limit: {}", config.search.default_limit);
            println!("  Max limit: {}", config.search.max_limit);
            println!("  Server: {}:{}", config.server.host, config.server.port);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }

    Ok(())
}

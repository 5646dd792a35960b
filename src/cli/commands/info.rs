//! Catalog-info command - show record counts and source

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the catalog-info command
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Execute the catalog-info command
pub async fn execute(
    _args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = services.catalog.get_or_load().await?;

    let info = crate::core::types::CatalogInfo {
        records: catalog.len(),
        total_in_source: catalog.total_in_source(),
        source: catalog.source().to_string(),
    };

    match format {
        OutputFormat::Human => {
            output::print_header("Catalog");
            println!("  Source: {}", info.source);
            println!(
                "  Records: {} searchable ({} in source)",
                colors::number(&info.records.to_string()),
                info.total_in_source
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}

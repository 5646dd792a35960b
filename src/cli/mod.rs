//! CLI adapter for Quarry
//!
//! Provides a command-line interface over the catalog search core.
//! This module is parallel to `http/` - both depend on `core/` but not
//! on each other.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Quarry - faceted dataset catalog search
///
/// Searches a static JSON catalog of dataset records with free-text
/// queries and structured filters, ranked by weighted field matches.
#[derive(Parser, Debug)]
#[command(name = "quarry")]
#[command(version)]
#[command(about = "Faceted dataset catalog search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog with a query and filters
    Search(commands::SearchArgs),

    /// Show catalog record counts and source
    #[command(name = "catalog-info")]
    CatalogInfo(commands::InfoArgs),

    /// List selectable filter values from the vocabulary
    #[command(name = "list-filters")]
    ListFilters(commands::FiltersArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  quarry completions bash > ~/.local/share/bash-completion/completions/quarry
    ///   zsh:   quarry completions zsh > ~/.zfunc/_quarry
    ///   fish:  quarry completions fish > ~/.config/fish/completions/quarry.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;

    // Load configuration
    let config = Config::load()?;

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::CatalogInfo(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::ListFilters(args) => {
            commands::filters::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}

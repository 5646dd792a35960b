//! Quarry CLI - Command-line interface for catalog search
//!
//! A direct command-line interface over the catalog search core. Use
//! this for scripting, automation, or manual lookups without running
//! the HTTP server.
//!
//! # Examples
//!
//! ```bash
//! # Free-text search
//! quarry search "ocean temperature"
//!
//! # Filters compose with the query
//! quarry search ocean --category environment --public true
//!
//! # Browse by filters alone
//! quarry search --location pacific --collected-after 2019-01-01
//!
//! # Inspect the catalog
//! quarry catalog-info
//! ```

use clap::Parser;
use quarry::cli::{output, run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

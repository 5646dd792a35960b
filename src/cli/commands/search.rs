//! Search command - query the catalog with filters

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::search::{snippet, DateFilter, FilterSpec, SNIPPET_LEN};
use crate::core::services::Services;
use crate::core::types::SearchRequest;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query (may be omitted to browse by filters alone)
    #[arg(default_value = "")]
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,

    /// Require a category (repeatable; any may match)
    #[arg(long = "category", value_name = "NAME")]
    pub category: Vec<String>,

    /// Require a kind of data (repeatable; any may match)
    #[arg(long = "data-type", value_name = "NAME")]
    pub data_type: Vec<String>,

    /// Require a research field (repeatable; any may match)
    #[arg(long = "research-field", value_name = "NAME")]
    pub research_field: Vec<String>,

    /// Require a collection location (repeatable; any may match)
    #[arg(long = "location", value_name = "NAME")]
    pub location: Vec<String>,

    /// Require a keyword (repeatable; ALL must be present)
    #[arg(long = "keyword", value_name = "WORD")]
    pub keyword: Vec<String>,

    /// Require file extensions (comma-separated; any may match)
    #[arg(long, value_name = "EXTS")]
    pub file_extensions: Option<String>,

    /// Only records that are (or are not) publicly available
    #[arg(long, value_name = "BOOL")]
    pub public: Option<bool>,

    /// Only records whose collection started on/after this date
    #[arg(long, value_name = "DATE")]
    pub collected_after: Option<String>,

    /// Only records whose collection ended on/before this date
    #[arg(long, value_name = "DATE")]
    pub collected_before: Option<String>,

    /// Only show record ids (no details)
    #[arg(long)]
    pub ids_only: bool,
}

impl SearchArgs {
    /// Build the canonical filter spec from the flags
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            publicly_available: match self.public {
                Some(b) => crate::core::search::BoolFilter::Only(b),
                None => crate::core::search::BoolFilter::Any,
            },
            data_types: self.data_type.clone(),
            category: self.category.clone(),
            research_field: self.research_field.clone(),
            location: self.location.clone(),
            mandatory_keywords: self.keyword.clone(),
            file_extensions: self.file_extensions.clone().unwrap_or_default(),
            collection_start: match &self.collected_after {
                Some(date) => DateFilter::after(date.clone()),
                None => DateFilter::default(),
            },
            collection_end: match &self.collected_before {
                Some(date) => DateFilter::before(date.clone()),
                None => DateFilter::default(),
            },
        }
    }
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub duration_ms: u64,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = SearchRequest {
        query: args.query.clone(),
        filters: args.filter_spec(),
        limit: args.limit,
    };

    // Advisory: flag filter values the vocabulary does not know.
    // Unknown values still filter, they just match nothing.
    if services.config.catalog.vocabulary_path.is_some() {
        if let Ok(vocabulary) = services.load_vocabulary().await {
            for unknown in vocabulary.unknown_values(&request.filters) {
                output::print_warning(&format!("filter value not in vocabulary ({unknown})"));
            }
        }
    }

    let response = services.search.search(request).await?;

    let output = SearchResponseOutput {
        query: args.query.clone(),
        total_results: response.count,
        duration_ms: response.duration_ms,
        results: response
            .results
            .iter()
            .enumerate()
            .map(|(i, r)| SearchResultItem {
                rank: i + 1,
                id: r.id.to_string(),
                name: r.name.clone(),
                location: if r.location.is_empty() {
                    None
                } else {
                    Some(r.location.clone())
                },
                keywords: r.keywords.clone(),
                snippet: if args.ids_only || r.abstract_text.is_empty() {
                    None
                } else {
                    Some(snippet(&r.abstract_text, &args.query, SNIPPET_LEN))
                },
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&args.query));
            } else {
                println!(
                    "Found {} result(s):\n",
                    colors::number(&output.total_results.to_string())
                );

                for result in &output.results {
                    if args.ids_only {
                        println!("{}", colors::record_id(&result.id));
                        continue;
                    }

                    println!(
                        "[{}] {} {}",
                        colors::rank(&result.rank.to_string()),
                        colors::title(&result.name),
                        colors::dim(&format!("({})", result.id))
                    );
                    if !result.keywords.is_empty() {
                        println!("    Keywords: {}", result.keywords.join(", "));
                    }
                    if let Some(location) = &result.location {
                        println!("    Location: {location}");
                    }
                    if let Some(text) = &result.snippet {
                        println!("    {}", colors::dim(text));
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

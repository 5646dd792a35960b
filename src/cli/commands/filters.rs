//! List-filters command - show selectable filter values

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Arguments for the list-filters command
#[derive(Args, Debug)]
pub struct FiltersArgs {
    /// Only show values for this field
    #[arg(long, value_name = "FIELD")]
    pub field: Option<String>,
}

#[derive(Debug, Serialize)]
struct FiltersOutput {
    fields: BTreeMap<String, Vec<String>>,
}

/// Execute the list-filters command
pub async fn execute(
    args: FiltersArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let vocabulary = services.load_vocabulary().await?;

    let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for field in vocabulary.fields() {
        if let Some(wanted) = &args.field {
            if field != wanted {
                continue;
            }
        }
        let values = vocabulary
            .values(field)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        fields.insert(field.to_string(), values);
    }

    if let Some(wanted) = &args.field {
        if fields.is_empty() {
            return Err(format!(
                "Field '{wanted}' not present in the vocabulary. Run 'quarry list-filters' to see all fields."
            )
            .into());
        }
    }

    match format {
        OutputFormat::Human => {
            for (field, values) in &fields {
                println!("{}", colors::label(field));
                for value in values {
                    println!("  {value}");
                }
                println!();
            }
        }
        OutputFormat::Json => {
            let output = FiltersOutput { fields };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

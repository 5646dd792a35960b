//! Filter-option vocabulary.
//!
//! A separate JSON object supplies the selectable values for the
//! multi-select filters. The tree is nested, depth indicating
//! hierarchy: object keys are selectable values with children, string
//! leaves are plain values. The core treats this purely as a vocabulary
//! for validation and UI listings; it is never consulted at query time.

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::core::error::{QuarryError, Result};
use crate::core::search::{normalize_str, FilterSpec};

/// Flattened filter-option vocabulary, field name -> selectable values
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    fields: BTreeMap<String, BTreeSet<String>>,
}

impl Vocabulary {
    /// Load and flatten a vocabulary file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| QuarryError::VocabularyError(format!("{}: {e}", path.display())))?;
        let value: Value = serde_json::from_str(&raw)?;
        Self::from_json(&value)
    }

    /// Flatten a vocabulary tree.
    ///
    /// Top-level keys name the filter fields; below that, every object
    /// key and every string leaf is a selectable value.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(QuarryError::VocabularyError(
                "vocabulary root must be an object".to_string(),
            ));
        };

        let mut fields = BTreeMap::new();
        for (field, subtree) in map {
            let mut values = BTreeSet::new();
            collect_values(subtree, &mut values);
            fields.insert(field.clone(), values);
        }

        Ok(Self { fields })
    }

    /// Names of the fields this vocabulary covers
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Selectable values for one field, if covered
    pub fn values(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.fields.get(field)
    }

    /// Filter values in `spec` that the vocabulary does not list.
    ///
    /// Advisory only: unknown values still filter, they just match
    /// nothing. Comparison is case-insensitive; fields the vocabulary
    /// does not cover are skipped.
    pub fn unknown_values(&self, spec: &FilterSpec) -> Vec<String> {
        let mut unknown = Vec::new();
        for (field, values) in [
            ("category", &spec.category),
            ("location", &spec.location),
            ("dataType", &spec.data_types),
            ("researchField", &spec.research_field),
        ] {
            let Some(known) = self.fields.get(field) else {
                continue;
            };
            let known: BTreeSet<String> = known.iter().map(|v| normalize_str(v)).collect();

            for value in values {
                let normalized = normalize_str(value);
                if !normalized.is_empty() && !known.contains(&normalized) {
                    unknown.push(format!("{field}: {value}"));
                }
            }
        }
        unknown
    }
}

fn collect_values(node: &Value, out: &mut BTreeSet<String>) {
    match node {
        Value::String(s) => {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                out.insert(trimmed.to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_values(item, out);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                let trimmed = key.trim();
                if !trimmed.is_empty() {
                    out.insert(trimmed.to_string());
                }
                collect_values(child, out);
            }
        }
        _ => {}
    }
}

//! Filter engine: structured predicates over catalog records.
//!
//! Every filter field carries an "ignore" sentinel (empty string, empty
//! set, `type: "ignore"`); a record must pass every active filter to
//! survive. Predicates are independent and pure, so the filtered set
//! does not depend on application order.
//!
//! Filter values arriving over the wire are malformed surprisingly
//! often (scalar where a list is expected, junk date strings). None of
//! that is an error: malformed values collapse to the ignore sentinel,
//! and unparseable dates never exclude a record.

use chrono::NaiveDate;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::search::query::{normalize_list, normalize_str};
use crate::core::types::Record;

/// Tri-state filter on a boolean record field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoolFilter {
    /// No constraint
    #[default]
    Any,
    /// Record field must equal the given value
    Only(bool),
}

impl BoolFilter {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(b) => BoolFilter::Only(*b),
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" => BoolFilter::Only(true),
                "false" | "no" => BoolFilter::Only(false),
                _ => BoolFilter::Any,
            },
            _ => BoolFilter::Any,
        }
    }

    /// Whether this filter constrains anything
    pub fn is_active(&self) -> bool {
        matches!(self, BoolFilter::Only(_))
    }
}

impl Serialize for BoolFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // The wire shape uses "" as the ignore sentinel
        match self {
            BoolFilter::Any => serializer.serialize_str(""),
            BoolFilter::Only(b) => serializer.serialize_bool(*b),
        }
    }
}

impl<'de> Deserialize<'de> for BoolFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(BoolFilter::from_value(&value))
    }
}

/// Direction of a date constraint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilterKind {
    #[default]
    Ignore,
    After,
    Before,
}

/// Constraint on a record date field
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DateFilter {
    #[serde(rename = "type")]
    pub kind: DateFilterKind,
    pub date: String,
}

impl DateFilter {
    /// Build an `after` constraint
    pub fn after(date: impl Into<String>) -> Self {
        Self {
            kind: DateFilterKind::After,
            date: date.into(),
        }
    }

    /// Build a `before` constraint
    pub fn before(date: impl Into<String>) -> Self {
        Self {
            kind: DateFilterKind::Before,
            date: date.into(),
        }
    }

    /// Whether this filter constrains anything
    pub fn is_active(&self) -> bool {
        self.kind != DateFilterKind::Ignore
    }
}

impl<'de> Deserialize<'de> for DateFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let Value::Object(map) = &value else {
            return Ok(DateFilter::default());
        };

        let kind = match map.get("type").and_then(Value::as_str) {
            Some(t) => match t.trim().to_lowercase().as_str() {
                "after" => DateFilterKind::After,
                "before" => DateFilterKind::Before,
                _ => DateFilterKind::Ignore,
            },
            None => DateFilterKind::Ignore,
        };

        let date = map
            .get("date")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(DateFilter { kind, date })
    }
}

/// Typed filter constraints for one search.
///
/// The wire shape is camelCase, matching the URL-parameter names
/// browser clients send. Every field defaults to its ignore sentinel,
/// so `FilterSpec::default()` constrains nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    pub publicly_available: BoolFilter,

    #[serde(deserialize_with = "crate::core::types::lenient_string_vec")]
    pub data_types: Vec<String>,

    #[serde(deserialize_with = "crate::core::types::lenient_string_vec")]
    pub category: Vec<String>,

    #[serde(deserialize_with = "crate::core::types::lenient_string_vec")]
    pub research_field: Vec<String>,

    #[serde(deserialize_with = "crate::core::types::lenient_string_vec")]
    pub location: Vec<String>,

    /// Every listed keyword must be present on the record (AND), unlike
    /// the OR semantics of the other multi-selects.
    #[serde(deserialize_with = "crate::core::types::lenient_string_vec")]
    pub mandatory_keywords: Vec<String>,

    /// Comma-separated extension tokens, OR semantics
    #[serde(deserialize_with = "crate::core::types::lenient_string")]
    pub file_extensions: String,

    pub collection_start: DateFilter,
    pub collection_end: DateFilter,
}

impl FilterSpec {
    /// True when no filter field constrains anything.
    pub fn is_empty(&self) -> bool {
        !self.publicly_available.is_active()
            && !has_values(&self.data_types)
            && !has_values(&self.category)
            && !has_values(&self.research_field)
            && !has_values(&self.location)
            && !has_values(&self.mandatory_keywords)
            && parse_extensions(&self.file_extensions).is_empty()
            && !self.collection_start.is_active()
            && !self.collection_end.is_active()
    }
}

/// A multi-select is active only if it has at least one non-blank value.
///
/// Empty arrays, `[""]`, and all-whitespace entries are all the
/// "no constraint" sentinel.
fn has_values(values: &[String]) -> bool {
    values.iter().any(|v| !v.trim().is_empty())
}

/// Normalized, non-blank values of a multi-select.
fn active_values(values: &[String]) -> Vec<String> {
    normalize_list(values)
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect()
}

/// Parse a comma-separated extension string into normalized tokens.
fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_str)
        .filter(|t| !t.is_empty())
        .collect()
}

/// True iff at least one filter value appears in the record values.
/// Both sides must already be normalized.
fn intersects(record_values: &[String], filter_values: &[String]) -> bool {
    filter_values.iter().any(|f| record_values.contains(f))
}

/// Lenient date parsing for record and filter dates.
///
/// Accepts ISO dates, the date part of ISO datetimes, slash and dot
/// forms, year-month, and bare years. Returns `None` for anything else;
/// the date predicates treat `None` as "cannot exclude".
pub fn parse_date_lenient(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Keep only the date part of datetime strings
    let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);

    const FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d.%m.%Y"];
    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
            return Some(date);
        }
    }

    // Year-month ("2020-06") and bare year ("2020")
    let pieces: Vec<&str> = date_part.split('-').collect();
    match pieces.as_slice() {
        [year, month] => {
            let y = year.parse().ok()?;
            let m = month.parse().ok()?;
            NaiveDate::from_ymd_opt(y, m, 1)
        }
        [year] => {
            let y: i32 = year.parse().ok()?;
            if !(1000..=9999).contains(&y) {
                return None;
            }
            NaiveDate::from_ymd_opt(y, 1, 1)
        }
        _ => None,
    }
}

/// Check a record date against a date filter.
///
/// Passes whenever the filter is inactive or either side fails to
/// parse: an unparseable date never excludes a record.
fn check_date(record_date: &str, filter: &DateFilter) -> bool {
    if !filter.is_active() {
        return true;
    }

    let (Some(record), Some(bound)) = (
        parse_date_lenient(record_date),
        parse_date_lenient(&filter.date),
    ) else {
        return true;
    };

    match filter.kind {
        DateFilterKind::After => record >= bound,
        DateFilterKind::Before => record <= bound,
        DateFilterKind::Ignore => true,
    }
}

/// Whether one record passes every active filter.
pub fn matches(record: &Record, spec: &FilterSpec) -> bool {
    if let BoolFilter::Only(wanted) = spec.publicly_available {
        if record.publicly_available != wanted {
            return false;
        }
    }

    if has_values(&spec.data_types)
        && !intersects(&normalize_list(&record.data_types), &active_values(&spec.data_types))
    {
        return false;
    }

    if has_values(&spec.category)
        && !intersects(
            &normalize_list(&record.categories_list),
            &active_values(&spec.category),
        )
    {
        return false;
    }

    if has_values(&spec.research_field)
        && !intersects(
            &normalize_list(&record.research_fields),
            &active_values(&spec.research_field),
        )
    {
        return false;
    }

    // location is a scalar on the record side: a one-element set
    if has_values(&spec.location)
        && !intersects(
            &[normalize_str(&record.location)],
            &active_values(&spec.location),
        )
    {
        return false;
    }

    if has_values(&spec.mandatory_keywords) {
        let keywords = normalize_list(&record.keywords);
        let all_present = active_values(&spec.mandatory_keywords)
            .iter()
            .all(|wanted| keywords.contains(wanted));
        if !all_present {
            return false;
        }
    }

    let extensions = parse_extensions(&spec.file_extensions);
    if !extensions.is_empty() && !intersects(&normalize_list(&record.file_extensions), &extensions)
    {
        return false;
    }

    if !check_date(&record.collection_start, &spec.collection_start) {
        return false;
    }

    if !check_date(&record.collection_end, &spec.collection_end) {
        return false;
    }

    true
}

/// Reduce the record set to those passing every active filter.
///
/// Returns an order-preserving subsequence of the input.
pub fn filter<'a>(records: &'a [Record], spec: &FilterSpec) -> Vec<&'a Record> {
    records.iter().filter(|r| matches(r, spec)).collect()
}

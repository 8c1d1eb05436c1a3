//! Type inference engine
//!
//! Classifies raw JSON values, and columns across sampled rows, into
//! semantic types, and derives the initial column configuration from a
//! dataset.
//!
//! Column classification deliberately samples only the first few rows.
//! This is an accuracy/performance tradeoff: large datasets are never
//! scanned in full at inference time, at the cost of occasional
//! misclassification on sparse or mixed columns. Known limitation, not a
//! bug.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::{ColumnConfig, Dataset, SemanticType};

/// Number of leading rows sampled for column classification.
pub const SAMPLE_SIZE: usize = 5;

/// Date-like string prefixes: `YYYY-MM-DD`, `MM/DD/YYYY`, `MM-DD-YYYY`.
static DATE_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d{4}-\d{2}-\d{2})|(\d{2}/\d{2}/\d{4})|(\d{2}-\d{2}-\d{4}))")
        .expect("date prefix pattern is valid")
});

/// Classify a single JSON value. Total and pure: every value maps to
/// exactly one semantic type.
///
/// Null maps to `string` by policy: absence of evidence defaults to the
/// most permissive display type.
pub fn classify_value(value: &Value) -> SemanticType {
    match value {
        Value::Null => SemanticType::String,
        Value::Bool(_) => SemanticType::Boolean,
        Value::Number(_) => SemanticType::Number,
        Value::Object(_) | Value::Array(_) => SemanticType::Object,
        Value::String(s) => {
            if is_date_like(s) {
                SemanticType::Date
            } else {
                SemanticType::String
            }
        }
    }
}

/// A string counts as a date when one of the known prefixes matches and
/// the matched prefix is a real calendar date.
fn is_date_like(s: &str) -> bool {
    let Some(caps) = DATE_PREFIX.captures(s) else {
        return false;
    };
    let parsed = if let Some(m) = caps.get(1) {
        chrono::NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d")
    } else if let Some(m) = caps.get(2) {
        chrono::NaiveDate::parse_from_str(m.as_str(), "%m/%d/%Y")
    } else if let Some(m) = caps.get(3) {
        chrono::NaiveDate::parse_from_str(m.as_str(), "%m-%d-%Y")
    } else {
        return false;
    };
    parsed.is_ok()
}

/// Classify a column by sampling the first `min(SAMPLE_SIZE, N)` rows and
/// selecting the modal type. Ties break to the type first encountered
/// with the maximal count (stable, not alphabetical).
pub fn classify_column(dataset: &Dataset, key: &str) -> SemanticType {
    let sampled: Vec<SemanticType> = dataset
        .rows()
        .iter()
        .take(SAMPLE_SIZE)
        .map(|row| classify_value(row.get(key).unwrap_or(&Value::Null)))
        .collect();

    let mut best = SemanticType::String;
    let mut best_count = 0usize;
    for candidate in &sampled {
        let count = sampled.iter().filter(|t| *t == candidate).count();
        if count > best_count {
            best = *candidate;
            best_count = count;
        }
    }
    best
}

/// Derive the initial column configuration from a dataset.
///
/// Column order follows the key order of the first record; labels come
/// from [`derive_label`]. An empty dataset yields no columns.
pub fn detect_columns(dataset: &Dataset) -> Vec<ColumnConfig> {
    let Some(first) = dataset.first() else {
        return Vec::new();
    };

    first
        .keys()
        .enumerate()
        .map(|(index, key)| {
            ColumnConfig::new(key, derive_label(key), classify_column(dataset, key), index)
        })
        .collect()
}

/// Cosmetic camelCase-to-Title-Case heuristic: capitalize the first
/// character and insert a space before each embedded uppercase letter.
/// Users can override the result at any time.
pub fn derive_label(key: &str) -> String {
    let mut chars = key.chars();
    let mut label = String::with_capacity(key.len() + 4);
    if let Some(first) = chars.next() {
        label.extend(first.to_uppercase());
    }
    for c in chars {
        if c.is_uppercase() {
            label.push(' ');
        }
        label.push(c);
    }
    label.trim().to_string()
}

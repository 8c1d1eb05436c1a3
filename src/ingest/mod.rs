//! JSON ingestion boundary
//!
//! Validates uploaded or pasted JSON text into a [`Dataset`]. All
//! validation failures are terminal here: callers replace their model
//! only on success, so a rejected input leaves existing state untouched.

use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{Dataset, RawRecord};

/// Why an input was rejected. Each variant carries a distinct,
/// user-visible reason string.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),
    #[error("JSON must be an array of objects")]
    NotAnArray,
    #[error("Array cannot be empty")]
    EmptyArray,
    #[error("All items in the array must be objects")]
    ElementNotObject,
}

/// Parse JSON text into a validated dataset.
///
/// Accepts only a non-empty array of plain objects; nested arrays and
/// primitives at the top level are rejected with
/// [`IngestError::ElementNotObject`].
pub fn parse_dataset(text: &str) -> Result<Dataset, IngestError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "rejected input: JSON parse failure");
        IngestError::InvalidJson(e.to_string())
    })?;

    let Value::Array(items) = value else {
        warn!("rejected input: top-level value is not an array");
        return Err(IngestError::NotAnArray);
    };
    if items.is_empty() {
        warn!("rejected input: empty array");
        return Err(IngestError::EmptyArray);
    }

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Object(row) => rows.push(row),
            _ => {
                warn!("rejected input: array element is not a plain object");
                return Err(IngestError::ElementNotObject);
            }
        }
    }

    debug!(rows = rows.len(), "accepted dataset");
    Ok(Dataset::new(rows))
}

/// Built-in sample dataset, usable as a one-click seed. Exercises every
/// semantic type: strings, numbers, booleans, dates and a nested object.
pub fn sample_dataset() -> Dataset {
    SAMPLE.clone()
}

static SAMPLE: Lazy<Dataset> = Lazy::new(|| {
    let rows: Vec<RawRecord> =
        serde_json::from_str(SAMPLE_JSON).expect("built-in sample data is valid");
    Dataset::new(rows)
});

const SAMPLE_JSON: &str = r#"[
  { "id": 1, "name": "Alice Johnson", "email": "alice@example.com", "role": "Engineer", "isActive": true, "joinedAt": "2021-04-12", "score": 87.5, "address": { "city": "Berlin", "country": "Germany" } },
  { "id": 2, "name": "Bob Smith", "email": "bob@example.com", "role": "Designer", "isActive": false, "joinedAt": "2020-11-03", "score": 72.1, "address": { "city": "Lyon", "country": "France" } },
  { "id": 3, "name": "Carla Diaz", "email": "carla@example.com", "role": "Engineer", "isActive": true, "joinedAt": "2022-01-27", "score": 91.0, "address": { "city": "Madrid", "country": "Spain" } },
  { "id": 4, "name": "Deepak Rao", "email": "deepak@example.com", "role": "Manager", "isActive": true, "joinedAt": "2019-08-19", "score": 64.8, "address": { "city": "Pune", "country": "India" } },
  { "id": 5, "name": "Elena Petrova", "email": "elena@example.com", "role": "Designer", "isActive": false, "joinedAt": "2023-03-05", "score": 79.4, "address": { "city": "Sofia", "country": "Bulgaria" } },
  { "id": 6, "name": "Frank Weber", "email": "frank@example.com", "role": "Engineer", "isActive": true, "joinedAt": "2021-09-30", "score": 83.2, "address": { "city": "Vienna", "country": "Austria" } }
]"#;

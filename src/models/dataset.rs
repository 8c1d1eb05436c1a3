//! Dataset model for the SDK

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single row of input data: an insertion-ordered mapping from field
/// name to JSON value. Field order is preserved from the parsed input
/// (serde_json is built with `preserve_order`), which is what drives the
/// initial column order during inference.
pub type RawRecord = serde_json::Map<String, Value>;

/// An ordered collection of records sharing (by convention, not strict
/// enforcement) a common key set.
///
/// A `Dataset` is only ever replaced wholesale: upload, paste, sample load
/// or clear. There is no partial regeneration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<RawRecord>,
}

impl Dataset {
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[RawRecord] {
        &self.rows
    }

    /// First record, the one whose key order seeds column order.
    pub fn first(&self) -> Option<&RawRecord> {
        self.rows.first()
    }

    /// Value at `key` for every row, with missing fields read as null.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.rows
            .iter()
            .map(move |row| row.get(key).unwrap_or(&Value::Null))
    }
}

impl FromIterator<RawRecord> for Dataset {
    fn from_iter<T: IntoIterator<Item = RawRecord>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

//! Semantic column types and filter kinds shared across the SDK

use serde::{Deserialize, Serialize};

/// Semantic type of a column, inferred from sampled data.
///
/// This is a closed set: every JSON value classifies to exactly one variant.
/// The type is fixed at inference time and never re-inferred on edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    String,
    Number,
    Boolean,
    Date,
    Object,
}

impl SemanticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::String => "string",
            SemanticType::Number => "number",
            SemanticType::Boolean => "boolean",
            SemanticType::Date => "date",
            SemanticType::Object => "object",
        }
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter kind tags shared between the live predicate library and the
/// code generator's emitted filter registry.
///
/// The generated table module recreates its own copies of the predicate
/// functions rather than importing this crate, so the registry keys it
/// declares and the tags it puts on column definitions both come from
/// `FilterKind::key()`. Keeping a single enumeration here is what prevents
/// the two sides from drifting apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    Text,
    Number,
    Boolean,
    Select,
    MultiSelect,
    Array,
    DateRange,
}

impl FilterKind {
    /// Stable registry key, identical in the live preview and generated code.
    pub fn key(&self) -> &'static str {
        match self {
            FilterKind::Text => "text",
            FilterKind::Number => "number",
            FilterKind::Boolean => "boolean",
            FilterKind::Select => "select",
            FilterKind::MultiSelect => "multiSelect",
            FilterKind::Array => "array",
            FilterKind::DateRange => "dateRange",
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

//! Column configuration model
//!
//! `ColumnConfig` is the central entity of the SDK: one entry per table
//! column, created by inference and edited by the user. The serialized
//! shape matches the column config consumed by the table builder UI
//! (camelCase keys, `type` for the semantic type).

use serde::{Deserialize, Serialize};

use super::semantic_type::SemanticType;

/// One selectable entry of a faceted filter.
///
/// `value` uniqueness is deliberately not enforced; duplicate values are
/// user error, not a validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// How faceted filter options are sourced for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionsMode {
    /// Options are derived live from dataset contents; nothing is persisted
    /// on the column.
    Auto,
    /// The `options` list on the column is authoritative.
    Custom,
}

/// Per-column configuration entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    /// Stable identifier, equal to the originating field key. Never changes
    /// after creation, even when the label does; used as the join key to
    /// visibility state and dataset lookups.
    pub id: String,
    /// Field key this column reads from the dataset. Equals `id` for
    /// inferred columns.
    pub accessor: String,
    /// Human-readable display text, freely user-editable.
    pub label: String,
    /// Semantic type, fixed at inference time.
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
    /// Display order. Dense and unique across the collection (`0..N`)
    /// after every structural mutation.
    pub order: usize,
    /// Faceted filter toggle; only meaningful for string columns, but the
    /// model tolerates it being set elsewhere without effect.
    #[serde(default)]
    pub has_faceted_filter: bool,
    /// Date-range filter toggle; meaningful for date columns.
    #[serde(default)]
    pub has_date_filter: bool,
    /// Slider filter toggle; meaningful for number columns.
    #[serde(default)]
    pub has_slider_filter: bool,
    /// Set the first time the faceted filter is enabled (to `Auto`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_mode: Option<OptionsMode>,
    /// Custom option list; authoritative only when `options_mode` is
    /// `Custom`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FilterOption>,
}

impl ColumnConfig {
    /// Create an inferred column: `accessor` mirrors `id`, filters off.
    pub fn new(id: impl Into<String>, label: impl Into<String>, semantic_type: SemanticType, order: usize) -> Self {
        let id = id.into();
        Self {
            accessor: id.clone(),
            id,
            label: label.into(),
            semantic_type,
            order,
            has_faceted_filter: false,
            has_date_filter: false,
            has_slider_filter: false,
            options_mode: None,
            options: Vec::new(),
        }
    }
}

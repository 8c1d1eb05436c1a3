//! Column configuration model
//!
//! The in-memory, user-mutable store behind the column editor. Owns the
//! current dataset, the ordered column collection and the visibility
//! state, and exposes the atomic state transitions the UI layer calls.
//!
//! Invariants maintained after every mutation:
//! - `order` values form a contiguous permutation of `0..N`.
//! - Column ids are unique.
//! - Visibility keys track the column collection (seeded on replacement,
//!   pruned on deletion).
//!
//! Operations addressed at an unknown id or an out-of-range option index
//! are silent no-ops. A correct UI never triggers them, but they must not
//! corrupt state when driven programmatically.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::info;

use crate::infer::detect_columns;
use crate::models::{ColumnConfig, Dataset, FilterOption, OptionsMode, VisibilityState};

/// Which half of a custom option an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Label,
    Value,
}

/// The mutable table-builder model for one page/session instance.
///
/// All mutation is synchronous and single-actor; the UI calls a transition
/// function and re-renders from the updated state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableModel {
    dataset: Dataset,
    columns: Vec<ColumnConfig>,
    visibility: VisibilityState,
}

impl TableModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all current state and re-infer the model from `dataset`,
    /// with every column initially visible.
    ///
    /// This is the only way columns are (re)created: any dataset change
    /// replaces the model wholesale and loses prior user customization.
    pub fn replace_from_dataset(&mut self, dataset: Dataset) {
        self.columns = detect_columns(&dataset);
        self.visibility = self
            .columns
            .iter()
            .map(|col| (col.id.clone(), true))
            .collect();
        info!(
            rows = dataset.len(),
            columns = self.columns.len(),
            "replaced dataset and re-inferred columns"
        );
        self.dataset = dataset;
    }

    /// Drop the dataset and all derived state.
    pub fn clear(&mut self) {
        self.dataset = Dataset::default();
        self.columns.clear();
        self.visibility.clear();
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    pub fn column(&self, id: &str) -> Option<&ColumnConfig> {
        self.columns.iter().find(|col| col.id == id)
    }

    /// Update the display label only; id, accessor and type are untouched.
    pub fn rename_label(&mut self, id: &str, new_label: &str) {
        if let Some(col) = self.column_mut(id) {
            col.label = new_label.to_string();
        }
    }

    /// Move the column to `target_index` among its siblings, then renumber
    /// every column's `order` to match array position. Targets beyond the
    /// end clamp to the last position; moving a column onto itself is a
    /// no-op.
    pub fn reorder(&mut self, id: &str, target_index: usize) {
        let Some(from) = self.columns.iter().position(|col| col.id == id) else {
            return;
        };
        let to = target_index.min(self.columns.len() - 1);
        if from != to {
            let col = self.columns.remove(from);
            self.columns.insert(to, col);
        }
        self.renumber();
    }

    /// Enable or disable faceted filtering. The first enable also seeds
    /// `options_mode` to auto.
    pub fn toggle_faceted_filter(&mut self, id: &str, enabled: bool) {
        if let Some(col) = self.column_mut(id) {
            col.has_faceted_filter = enabled;
            if enabled && col.options_mode.is_none() {
                col.options_mode = Some(OptionsMode::Auto);
            }
        }
    }

    pub fn toggle_date_filter(&mut self, id: &str, enabled: bool) {
        if let Some(col) = self.column_mut(id) {
            col.has_date_filter = enabled;
        }
    }

    pub fn toggle_slider_filter(&mut self, id: &str, enabled: bool) {
        if let Some(col) = self.column_mut(id) {
            col.has_slider_filter = enabled;
        }
    }

    /// Switch between auto-derived and custom options. Switching to custom
    /// with no options yet captures the auto-derived options as the
    /// initial custom set; a snapshot taken at this instant, not a live
    /// binding.
    pub fn set_options_mode(&mut self, id: &str, mode: OptionsMode) {
        let seed = if mode == OptionsMode::Custom {
            self.derive_auto_options(id)
        } else {
            Vec::new()
        };
        if let Some(col) = self.column_mut(id) {
            col.options_mode = Some(mode);
            if mode == OptionsMode::Custom && col.options.is_empty() {
                col.options = seed;
            }
        }
    }

    /// Append an empty option pair for the user to fill in.
    pub fn add_custom_option(&mut self, id: &str) {
        if let Some(col) = self.column_mut(id) {
            col.options.push(FilterOption::default());
        }
    }

    /// Edit one field of one option. Out-of-range indexes are ignored.
    pub fn update_custom_option(&mut self, id: &str, index: usize, field: OptionField, value: &str) {
        if let Some(col) = self.column_mut(id) {
            if let Some(option) = col.options.get_mut(index) {
                match field {
                    OptionField::Label => option.label = value.to_string(),
                    OptionField::Value => option.value = value.to_string(),
                }
            }
        }
    }

    /// Remove one option. Out-of-range indexes are ignored.
    pub fn remove_custom_option(&mut self, id: &str, index: usize) {
        if let Some(col) = self.column_mut(id) {
            if index < col.options.len() {
                col.options.remove(index);
            }
        }
    }

    /// Remove the column, renumber the remainder contiguously, and prune
    /// its accessor from the visibility state.
    pub fn delete_column(&mut self, id: &str) {
        let Some(index) = self.columns.iter().position(|col| col.id == id) else {
            return;
        };
        let removed = self.columns.remove(index);
        self.visibility.remove(&removed.accessor);
        self.renumber();
    }

    /// Show or hide a column. Unknown ids are ignored rather than
    /// inserting stray visibility keys.
    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if self.columns.iter().any(|col| col.id == id) {
            self.visibility.insert(id.to_string(), visible);
        }
    }

    /// Auto-derived faceted filter options for a column; see
    /// [`auto_options`].
    pub fn derive_auto_options(&self, id: &str) -> Vec<FilterOption> {
        self.column(id)
            .map(|col| auto_options(&self.dataset, col))
            .unwrap_or_default()
    }

    fn column_mut(&mut self, id: &str) -> Option<&mut ColumnConfig> {
        self.columns.iter_mut().find(|col| col.id == id)
    }

    fn renumber(&mut self) {
        for (index, col) in self.columns.iter_mut().enumerate() {
            col.order = index;
        }
    }
}

/// Bounds of the useful-cardinality window for auto-derived options.
pub const AUTO_OPTIONS_MIN: usize = 2;
pub const AUTO_OPTIONS_MAX: usize = 20;

/// Scan the full dataset (not a sample) for the column's distinct
/// non-null string values. When the distinct count sits in the
/// `2..=20` window, return them sorted ascending with `label == value`;
/// otherwise return an empty list, meaning faceted filtering is not
/// meaningful for this column's cardinality.
///
/// Callers suppress the faceted UI affordance on an empty result, but the
/// `has_faceted_filter` flag itself is never auto-cleared. Non-string
/// columns always yield an empty list.
pub fn auto_options(dataset: &Dataset, column: &ColumnConfig) -> Vec<FilterOption> {
    if column.semantic_type != crate::models::SemanticType::String {
        return Vec::new();
    }

    let distinct: BTreeSet<&str> = dataset
        .values(&column.accessor)
        .filter_map(|value| match value {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        })
        .collect();

    if distinct.len() < AUTO_OPTIONS_MIN || distinct.len() > AUTO_OPTIONS_MAX {
        return Vec::new();
    }

    distinct
        .into_iter()
        .map(|v| FilterOption::new(v, v))
        .collect()
}

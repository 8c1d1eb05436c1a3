//! Filter predicate library
//!
//! Named, pure predicate functions, one per filter kind, used by the live
//! preview table. The generated table module recreates TypeScript copies
//! of these same predicates under the same registry keys
//! ([`FilterKind::key`]); the behavior documented here is the contract
//! both sides implement.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::models::{ColumnConfig, FilterKind, RawRecord, VisibilityState};

/// An active filter value, carrying the shape its predicate expects.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Case-insensitive substring match; empty passes everything.
    Text(String),
    /// Inclusive numeric range; unset bounds are permissive.
    Number { min: Option<f64>, max: Option<f64> },
    /// Exact boolean match; `None` passes everything.
    Boolean(Option<bool>),
    /// Exact string equality; `None` passes everything.
    Select(Option<String>),
    /// Membership in the selected set; empty passes everything.
    MultiSelect(Vec<String>),
    /// Intersection with a list-valued row; empty passes everything.
    Array(Vec<String>),
    /// Epoch-millisecond range; unset bounds are permissive.
    DateRange { from: Option<i64>, to: Option<i64> },
}

impl FilterValue {
    /// The registry key this value dispatches to.
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterValue::Text(_) => FilterKind::Text,
            FilterValue::Number { .. } => FilterKind::Number,
            FilterValue::Boolean(_) => FilterKind::Boolean,
            FilterValue::Select(_) => FilterKind::Select,
            FilterValue::MultiSelect(_) => FilterKind::MultiSelect,
            FilterValue::Array(_) => FilterKind::Array,
            FilterValue::DateRange { .. } => FilterKind::DateRange,
        }
    }

    /// Apply this filter to a single row value.
    pub fn matches(&self, row_value: &Value) -> bool {
        match self {
            FilterValue::Text(needle) => text_filter(row_value, needle),
            FilterValue::Number { min, max } => number_filter(row_value, *min, *max),
            FilterValue::Boolean(wanted) => boolean_filter(row_value, *wanted),
            FilterValue::Select(wanted) => select_filter(row_value, wanted.as_deref()),
            FilterValue::MultiSelect(wanted) => multi_select_filter(row_value, wanted),
            FilterValue::Array(wanted) => array_contains_filter(row_value, wanted),
            FilterValue::DateRange { from, to } => date_range_filter(row_value, *from, *to),
        }
    }
}

/// Numeric range filter. Non-numeric row values are excluded; unlike the
/// generated `numberFilter`, which runs values through `Number(...)` and
/// so accepts numeric strings like `"5"`, this side does not coerce.
pub fn number_filter(row_value: &Value, min: Option<f64>, max: Option<f64>) -> bool {
    let Some(n) = row_value.as_f64() else {
        return false;
    };
    if min.is_some_and(|min| n < min) {
        return false;
    }
    !max.is_some_and(|max| n > max)
}

/// Case-insensitive substring filter. Null row values stringify to "".
pub fn text_filter(row_value: &Value, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    display_string(row_value)
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

/// Exact boolean filter; an unset filter passes everything.
pub fn boolean_filter(row_value: &Value, wanted: Option<bool>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => row_value.as_bool() == Some(wanted),
    }
}

/// Single-select filter: exact string equality; unset passes everything.
pub fn select_filter(row_value: &Value, wanted: Option<&str>) -> bool {
    match wanted {
        None | Some("") => true,
        Some(wanted) => row_value.as_str() == Some(wanted),
    }
}

/// Multi-select filter: the row value must be one of the selected values;
/// an empty selection passes everything.
pub fn multi_select_filter(row_value: &Value, wanted: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    row_value
        .as_str()
        .is_some_and(|v| wanted.iter().any(|w| w == v))
}

/// Array-contains filter: the (list-valued) row must intersect the
/// selection. Empty selection passes; a non-list row fails.
pub fn array_contains_filter(row_value: &Value, wanted: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    let Some(items) = row_value.as_array() else {
        return false;
    };
    items
        .iter()
        .filter_map(Value::as_str)
        .any(|item| wanted.iter().any(|w| w == item))
}

/// Date-range filter over epoch milliseconds. Rows whose value cannot be
/// parsed as a date always fail; unset bounds on either side pass.
pub fn date_range_filter(row_value: &Value, from: Option<i64>, to: Option<i64>) -> bool {
    let Some(ms) = parse_date_ms(row_value) else {
        return false;
    };
    if from.is_some_and(|from| ms < from) {
        return false;
    }
    !to.is_some_and(|to| ms > to)
}

/// Global text filter: does any visible column of the record match?
pub fn row_matches_global(
    record: &RawRecord,
    columns: &[ColumnConfig],
    visibility: &VisibilityState,
    needle: &str,
) -> bool {
    if needle.is_empty() {
        return true;
    }
    columns
        .iter()
        .filter(|col| visibility.get(&col.id).copied().unwrap_or(true))
        .any(|col| {
            let value = record.get(&col.accessor).unwrap_or(&Value::Null);
            text_filter(value, needle)
        })
}

/// Parse a row value into epoch milliseconds. Numbers are taken as epoch
/// ms directly; strings go through RFC 3339 first and then the date
/// formats the inference engine recognizes.
pub fn parse_date_ms(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.timestamp_millis());
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
                return Some(dt.and_utc().timestamp_millis());
            }
            for format in ["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y"] {
                if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                    return Some(
                        date.and_hms_opt(0, 0, 0)?
                            .and_utc()
                            .timestamp_millis(),
                    );
                }
            }
            None
        }
        _ => None,
    }
}

/// Render a JSON value the way a cell would display it (strings without
/// quotes, null as empty).
fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

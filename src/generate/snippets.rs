//! TypeScript fragments baked into generated modules
//!
//! The generated table module is a standalone template: it carries its
//! own copies of the filter predicates rather than importing the SDK's
//! live library. Each snippet here implements the same contract as the
//! matching function in [`crate::filters`], and is registered under the
//! same [`FilterKind::key`].

use crate::models::{FilterKind, SemanticType};

/// Name of the generated predicate function for a filter kind.
pub fn filter_fn_name(kind: FilterKind) -> &'static str {
    match kind {
        FilterKind::Text => "textFilter",
        FilterKind::Number => "numberFilter",
        FilterKind::Boolean => "booleanFilter",
        FilterKind::Select => "selectFilter",
        FilterKind::MultiSelect => "multiSelectFilter",
        FilterKind::Array => "arrayContainsFilter",
        FilterKind::DateRange => "dateRangeFilter",
    }
}

/// TypeScript source of the predicate for a filter kind.
pub fn filter_fn_source(kind: FilterKind) -> &'static str {
    match kind {
        FilterKind::Text => {
            r#"function textFilter(row: Row<DataRow>, columnId: string, filterValue: string | null): boolean {
  if (!filterValue) return true
  return String(row.getValue(columnId) ?? "")
    .toLowerCase()
    .includes(filterValue.toLowerCase())
}"#
        }
        FilterKind::Number => {
            r#"function numberFilter(row: Row<DataRow>, columnId: string, filterValue: [number, number] | null): boolean {
  const raw = row.getValue(columnId)
  if (raw == null) return false
  const rowValue = Number(raw)
  if (isNaN(rowValue)) return false
  const [min, max] = filterValue ?? []
  if (min != null && rowValue < min) return false
  return !(max != null && rowValue > max)
}"#
        }
        FilterKind::Boolean => {
            r#"function booleanFilter(row: Row<DataRow>, columnId: string, filterValue: boolean | null): boolean {
  if (filterValue == null) return true
  return row.getValue(columnId) === filterValue
}"#
        }
        FilterKind::Select => {
            r#"function selectFilter(row: Row<DataRow>, columnId: string, filterValue: string | null): boolean {
  if (!filterValue) return true
  return row.getValue(columnId) === filterValue
}"#
        }
        FilterKind::MultiSelect => {
            r#"function multiSelectFilter(row: Row<DataRow>, columnId: string, filterValues: string[] | null): boolean {
  if (!filterValues?.length) return true
  return filterValues.includes(row.getValue(columnId) as string)
}"#
        }
        FilterKind::Array => {
            r#"function arrayContainsFilter(row: Row<DataRow>, columnId: string, filterValues: string[] | null): boolean {
  if (!filterValues?.length) return true
  const rowValues = row.getValue(columnId) as string[] | undefined
  return rowValues ? filterValues.some((v) => rowValues.includes(v)) : false
}"#
        }
        FilterKind::DateRange => {
            r#"function dateRangeFilter(row: Row<DataRow>, columnId: string, filterValue: [number?, number?] | null): boolean {
  const raw = row.getValue(columnId) as string | number | Date
  if (raw == null) return false
  const rowDate = new Date(raw)
  if (isNaN(rowDate.getTime())) return false
  if (!filterValue) return true
  const [from, to] = filterValue
  if (from && rowDate.getTime() < from) return false
  return !(to && rowDate.getTime() > to)
}"#
        }
    }
}

/// Type-appropriate cell template, indented for use inside a column
/// definition object (`cell: <snippet>`).
pub fn cell_snippet(semantic_type: SemanticType) -> &'static str {
    match semantic_type {
        SemanticType::Boolean => {
            r#"({ getValue }) => {
      const value = getValue()
      return (
        <Badge variant={value ? "default" : "secondary"} className="text-xs">
          {value ? "true" : "false"}
        </Badge>
      )
    }"#
        }
        SemanticType::Number => {
            r#"({ getValue }) => {
      const value = getValue()
      return <span className="font-mono">{value?.toLocaleString()}</span>
    }"#
        }
        SemanticType::Date => {
            r#"({ getValue }) => {
      const value = getValue()
      try {
        const date = new Date(value)
        return <span className="text-sm">{date.toLocaleDateString()}</span>
      } catch {
        return <span>{value}</span>
      }
    }"#
        }
        SemanticType::Object => {
            r#"({ getValue }) => {
      const value = getValue()
      return (
        <code className="text-xs bg-muted px-2 py-1 rounded max-w-[200px] block truncate">
          {JSON.stringify(value)}
        </code>
      )
    }"#
        }
        SemanticType::String => {
            r#"({ getValue }) => {
      const value = getValue()
      if (value === null || value === undefined) {
        return <span className="text-muted-foreground italic">null</span>
      }
      return <span className="max-w-[200px] block truncate">{String(value)}</span>
    }"#
        }
    }
}

//! Code generation
//!
//! Pure functions mapping (column configuration, dataset, visibility) to
//! five ready-to-paste source modules: a data literal, a columns module,
//! a full table component, a data-fetching module and a page module.
//!
//! Generation is deterministic (byte-identical output for identical
//! inputs), never fails, and reflects only the visible column set: the
//! emitted column sequence must match the live preview's, element for
//! element.

pub mod draft;
mod snippets;

mod columns;
mod data;
mod page;
mod query;
mod table;

use crate::models::{ColumnConfig, Dataset, FilterKind, FilterOption, SemanticType, VisibilityState};

/// The five generated source texts, each independently copyable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModules {
    /// `data.json` — the dataset as a pretty-printed JSON literal.
    pub data: String,
    /// `columns.tsx` — standalone column definitions.
    pub columns: String,
    /// `data-table.tsx` — self-contained table component with filters.
    pub table: String,
    /// `data-query.ts` — TanStack Query wrapper around the data literal.
    pub query: String,
    /// `page.tsx` — page wiring the table behind a suspense query.
    pub page: String,
}

impl GeneratedModules {
    /// Suggested file name for each module, in display order.
    pub fn files(&self) -> [(&'static str, &str); 5] {
        [
            ("data.json", self.data.as_str()),
            ("columns.tsx", self.columns.as_str()),
            ("data-table.tsx", self.table.as_str()),
            ("data-query.ts", self.query.as_str()),
            ("page.tsx", self.page.as_str()),
        ]
    }
}

/// Generator for the table builder's output modules.
pub struct CodeGenerator;

impl CodeGenerator {
    /// Generate all five modules.
    ///
    /// Columns whose id maps to `false` in `visibility` are silently
    /// dropped; an empty visible set still yields valid modules with an
    /// empty column array and no feature-specific imports.
    pub fn generate(
        columns: &[ColumnConfig],
        dataset: &Dataset,
        visibility: &VisibilityState,
    ) -> GeneratedModules {
        let visible = visible_sorted(columns, visibility);
        GeneratedModules {
            data: data::render(dataset),
            columns: columns::render(&visible),
            table: table::render(&visible, dataset, visibility),
            query: query::render(),
            page: page::render(),
        }
    }
}

/// Visible columns in display order: drop ids mapped to `false`, sort by
/// `order` ascending. Ids missing from the visibility map count as
/// visible, matching the live preview.
pub fn visible_sorted<'a>(
    columns: &'a [ColumnConfig],
    visibility: &VisibilityState,
) -> Vec<&'a ColumnConfig> {
    let mut visible: Vec<&ColumnConfig> = columns
        .iter()
        .filter(|col| visibility.get(&col.id).copied().unwrap_or(true))
        .collect();
    visible.sort_by_key(|col| col.order);
    visible
}

/// The single filter-kind tag for a column, if any, chosen by priority:
/// faceted string > date range > slider number. A column never carries
/// more than one tag even when several flags are set.
pub fn filter_kind_for(col: &ColumnConfig) -> Option<FilterKind> {
    if col.has_faceted_filter && col.semantic_type == SemanticType::String {
        Some(FilterKind::MultiSelect)
    } else if col.has_date_filter && col.semantic_type == SemanticType::Date {
        Some(FilterKind::DateRange)
    } else if col.has_slider_filter && col.semantic_type == SemanticType::Number {
        Some(FilterKind::Number)
    } else {
        None
    }
}

/// Options baked into generated code for a faceted column: non-empty
/// custom options win, otherwise the same full-dataset auto derivation
/// the live editor uses (2–20 distinct values window).
pub fn faceted_options(dataset: &Dataset, col: &ColumnConfig) -> Vec<FilterOption> {
    if col.options_mode == Some(crate::models::OptionsMode::Custom) && !col.options.is_empty() {
        return col.options.clone();
    }
    crate::config::auto_options(dataset, col)
}

/// Render one column definition object, shared by the columns module and
/// the table module so the two can never disagree on a column's shape.
pub(crate) fn render_column_def(col: &ColumnConfig) -> String {
    use draft::ts_string;

    let mut props: Vec<String> = Vec::new();
    props.push(format!("id: \"{}\"", ts_string(&col.id)));
    props.push(format!("accessorKey: \"{}\"", ts_string(&col.accessor)));
    props.push(format!(
        "header: ({{ column }}) => (\n      <DataTableColumnHeader column={{column}} title=\"{}\" />\n    )",
        ts_string(&col.label)
    ));
    if let Some(kind) = filter_kind_for(col) {
        props.push(format!("filterFn: \"{}\"", kind.key()));
    }
    props.push(format!("cell: {}", snippets::cell_snippet(col.semantic_type)));

    format!("  {{\n    {}\n  }}", props.join(",\n    "))
}

/// Render the full `columns` array literal.
pub(crate) fn render_columns_array(visible: &[&ColumnConfig]) -> String {
    if visible.is_empty() {
        return "const columns: ColumnDef<DataRow>[] = []".to_string();
    }
    let defs: Vec<String> = visible.iter().map(|col| render_column_def(col)).collect();
    format!(
        "const columns: ColumnDef<DataRow>[] = [\n{}\n]",
        defs.join(",\n")
    )
}

/// Row shape declared by standalone generated modules.
pub(crate) const DATA_ROW_INTERFACE: &str = r#"interface DataRow {
  [key: string]: string | number | boolean | null | undefined | object
}"#;

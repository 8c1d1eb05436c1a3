//! Table module target
//!
//! Emits `data-table.tsx`: a self-contained TanStack Table component with
//! the data literal, column definitions, its own copies of the filter
//! predicates, and toolbar filter controls for the features actually in
//! use. Imports and the filter-function registry are feature-detected
//! from the visible column set only.

use super::draft::{ts_string, IdentPool, ModuleDraft};
use super::snippets::{filter_fn_name, filter_fn_source};
use super::{faceted_options, filter_kind_for, render_columns_array, DATA_ROW_INTERFACE};
use crate::models::{ColumnConfig, Dataset, FilterKind, FilterOption, SemanticType, VisibilityState};

/// Registry emission order; text always present for the global filter.
const KIND_ORDER: [FilterKind; 7] = [
    FilterKind::Text,
    FilterKind::Number,
    FilterKind::Boolean,
    FilterKind::Select,
    FilterKind::MultiSelect,
    FilterKind::Array,
    FilterKind::DateRange,
];

pub fn render(
    visible: &[&ColumnConfig],
    dataset: &Dataset,
    visibility: &VisibilityState,
) -> String {
    let mut idents = IdentPool::new();
    let faceted_with_options: Vec<(&ColumnConfig, Vec<FilterOption>, String)> = visible
        .iter()
        .filter(|col| filter_kind_for(col) == Some(FilterKind::MultiSelect))
        .filter_map(|col| {
            let options = faceted_options(dataset, col);
            if options.is_empty() {
                None
            } else {
                let ident = idents.claim(&col.id);
                Some((*col, options, ident))
            }
        })
        .collect();
    let date_cols: Vec<&&ColumnConfig> = visible
        .iter()
        .filter(|col| filter_kind_for(col) == Some(FilterKind::DateRange))
        .collect();
    let slider_cols: Vec<&&ColumnConfig> = visible
        .iter()
        .filter(|col| filter_kind_for(col) == Some(FilterKind::Number))
        .collect();
    let has_boolean = visible
        .iter()
        .any(|col| col.semantic_type == SemanticType::Boolean);

    let used_kinds: Vec<FilterKind> = KIND_ORDER
        .iter()
        .copied()
        .filter(|kind| {
            *kind == FilterKind::Text
                || visible.iter().any(|col| filter_kind_for(col) == Some(*kind))
        })
        .collect();

    let mut draft = ModuleDraft::new();

    draft.import("'use client'");
    draft.import("import { useState } from 'react'");
    draft.import(
        r#"import {
  useReactTable,
  getCoreRowModel,
  getPaginationRowModel,
  getSortedRowModel,
  getFilteredRowModel,
  getFacetedRowModel,
  getFacetedUniqueValues,
  flexRender,
  type ColumnDef,
  type ColumnFiltersState,
  type Row,
  type SortingState,
  type VisibilityState
} from '@tanstack/react-table'"#,
    );
    draft.import(
        "import { Table, TableBody, TableCell, TableHead, TableHeader, TableRow } from '@/components/ui/table'",
    );
    draft.import("import { Input } from '@/components/ui/input'");
    if has_boolean {
        draft.import("import { Badge } from '@/components/ui/badge'");
    }
    draft.import(
        "import { DataTableColumnHeader } from '@/components/data-table/data-table-column-header'",
    );
    draft.import(
        "import { DataTablePagination } from '@/components/data-table/data-table-pagination'",
    );
    draft.import(
        "import { DataTableViewOptions } from '@/components/data-table/data-table-view-options'",
    );
    if !faceted_with_options.is_empty() {
        draft.import(
            "import { DataTableFacetedFilter } from '@/components/data-table/data-table-faceted-filter'",
        );
    }
    if !date_cols.is_empty() {
        draft.import(
            "import { DataTableDateFilter } from '@/components/data-table/data-table-date-filter'",
        );
    }
    if !slider_cols.is_empty() {
        draft.import(
            "import { DataTableSliderFilter } from '@/components/data-table/data-table-slider-filter'",
        );
    }

    draft.declare(DATA_ROW_INTERFACE);
    for kind in &used_kinds {
        draft.declare(filter_fn_source(*kind));
    }
    for (_, options, ident) in &faceted_with_options {
        draft.declare(render_options_const(ident, options));
    }
    draft.declare(format!(
        "const data: DataRow[] = {}",
        serde_json::to_string_pretty(dataset).unwrap_or_else(|_| "[]".to_string())
    ));
    draft.declare(render_columns_array(visible));

    draft.set_body(render_component(
        visibility,
        &faceted_with_options,
        &date_cols,
        &slider_cols,
        &used_kinds,
    ));

    draft.render()
}

fn render_options_const(ident: &str, options: &[FilterOption]) -> String {
    let entries: Vec<String> = options
        .iter()
        .map(|opt| {
            format!(
                "  {{ label: \"{}\", value: \"{}\" }}",
                ts_string(&opt.label),
                ts_string(&opt.value)
            )
        })
        .collect();
    format!("const {}Options = [\n{}\n]", ident, entries.join(",\n"))
}

fn render_registry(used_kinds: &[FilterKind]) -> String {
    let entries: Vec<String> = used_kinds
        .iter()
        .map(|kind| format!("      {}: {}", kind.key(), filter_fn_name(*kind)))
        .collect();
    format!("{{\n{}\n    }}", entries.join(",\n"))
}

/// Initial visibility literal: only the hidden entries, sorted by key.
/// Hidden columns are not emitted at all, so these keys are inert in the
/// generated module, but preserved so re-adding a column definition by
/// hand picks its visibility back up.
fn render_initial_visibility(visibility: &VisibilityState) -> String {
    let hidden: Vec<String> = visibility
        .iter()
        .filter(|(_, visible)| !**visible)
        .map(|(id, _)| format!("    \"{}\": false", ts_string(id)))
        .collect();
    if hidden.is_empty() {
        "{}".to_string()
    } else {
        format!("{{\n{}\n  }}", hidden.join(",\n"))
    }
}

fn render_toolbar(
    faceted: &[(&ColumnConfig, Vec<FilterOption>, String)],
    date_cols: &[&&ColumnConfig],
    slider_cols: &[&&ColumnConfig],
) -> String {
    let mut entries: Vec<String> = Vec::new();

    for (col, _, ident) in faceted {
        entries.push(format!(
            r#"          {{table.getColumn("{id}") && (
            <DataTableFacetedFilter
              column={{table.getColumn("{id}")}}
              title="{title}"
              options={{{ident}Options}}
            />
          )}}"#,
            id = ts_string(&col.id),
            title = ts_string(&col.label),
            ident = ident,
        ));
    }

    // Limit stacked range controls to keep the toolbar usable.
    for col in date_cols.iter().take(2) {
        entries.push(format!(
            r#"          {{table.getColumn("{id}") && (
            <DataTableDateFilter
              column={{table.getColumn("{id}")}}
              title="{title}"
              multiple={{true}}
            />
          )}}"#,
            id = ts_string(&col.id),
            title = ts_string(&col.label),
        ));
    }
    for col in slider_cols.iter().take(3) {
        entries.push(format!(
            r#"          {{table.getColumn("{id}") && (
            <DataTableSliderFilter
              column={{table.getColumn("{id}")}}
              title="{title}"
            />
          )}}"#,
            id = ts_string(&col.id),
            title = ts_string(&col.label),
        ));
    }

    entries.join("\n")
}

fn render_component(
    visibility: &VisibilityState,
    faceted: &[(&ColumnConfig, Vec<FilterOption>, String)],
    date_cols: &[&&ColumnConfig],
    slider_cols: &[&&ColumnConfig],
    used_kinds: &[FilterKind],
) -> String {
    let toolbar = render_toolbar(faceted, date_cols, slider_cols);
    let toolbar_block = if toolbar.is_empty() {
        String::new()
    } else {
        format!("{toolbar}\n")
    };

    format!(
        r#"export default function DataTable() {{
  const [sorting, setSorting] = useState<SortingState>([])
  const [columnFilters, setColumnFilters] = useState<ColumnFiltersState>([])
  const [columnVisibility, setColumnVisibility] = useState<VisibilityState>({initial_visibility})
  const [globalFilter, setGlobalFilter] = useState("")

  const table = useReactTable({{
    data,
    columns,
    onSortingChange: setSorting,
    onColumnFiltersChange: setColumnFilters,
    getCoreRowModel: getCoreRowModel(),
    getPaginationRowModel: getPaginationRowModel(),
    getSortedRowModel: getSortedRowModel(),
    getFilteredRowModel: getFilteredRowModel(),
    getFacetedRowModel: getFacetedRowModel(),
    getFacetedUniqueValues: getFacetedUniqueValues(),
    onColumnVisibilityChange: setColumnVisibility,
    onGlobalFilterChange: setGlobalFilter,
    globalFilterFn: "text",
    filterFns: {registry},
    state: {{
      sorting,
      columnFilters,
      columnVisibility,
      globalFilter
    }}
  }})

  return (
    <div className="w-full">
      <div className="flex items-center py-4">
        <Input
          placeholder="Filter all columns..."
          value={{globalFilter ?? ""}}
          onChange={{(event) => setGlobalFilter(String(event.target.value))}}
          className="max-w-sm h-8"
        />
        <div className="flex items-center space-x-2 ml-auto">
{toolbar_block}          <DataTableViewOptions table={{table}} />
        </div>
      </div>
      <div className="rounded-md border">
        <Table>
          <TableHeader>
            {{table.getHeaderGroups().map((headerGroup) => (
              <TableRow key={{headerGroup.id}}>
                {{headerGroup.headers.map((header) => (
                  <TableHead key={{header.id}}>
                    {{header.isPlaceholder
                      ? null
                      : flexRender(header.column.columnDef.header, header.getContext())}}
                  </TableHead>
                ))}}
              </TableRow>
            ))}}
          </TableHeader>
          <TableBody>
            {{table.getRowModel().rows?.length ? (
              table.getRowModel().rows.map((row) => (
                <TableRow key={{row.id}} data-state={{row.getIsSelected() && "selected"}}>
                  {{row.getVisibleCells().map((cell) => (
                    <TableCell key={{cell.id}}>
                      {{flexRender(cell.column.columnDef.cell, cell.getContext())}}
                    </TableCell>
                  ))}}
                </TableRow>
              ))
            ) : (
              <TableRow>
                <TableCell colSpan={{columns.length}} className="h-24 text-center">
                  No results.
                </TableCell>
              </TableRow>
            )}}
          </TableBody>
        </Table>
      </div>
      <DataTablePagination table={{table}} />
    </div>
  )
}}"#,
        initial_visibility = render_initial_visibility(visibility),
        registry = render_registry(used_kinds),
    )
}

//! Columns module target
//!
//! Emits a standalone `columns.tsx`: the visible column definitions with
//! headers, cells and filter-kind tags, for users wiring their own table
//! shell around them.

use super::draft::ModuleDraft;
use super::{render_columns_array, DATA_ROW_INTERFACE};
use crate::models::{ColumnConfig, SemanticType};

pub fn render(visible: &[&ColumnConfig]) -> String {
    let mut draft = ModuleDraft::new();

    draft.import("import type { ColumnDef } from '@tanstack/react-table'");
    draft.import(
        "import { DataTableColumnHeader } from '@/components/data-table/data-table-column-header'",
    );
    if visible
        .iter()
        .any(|col| col.semantic_type == SemanticType::Boolean)
    {
        draft.import("import { Badge } from '@/components/ui/badge'");
    }

    draft.declare(DATA_ROW_INTERFACE);
    draft.set_body(format!("export {}", render_columns_array(visible)));
    draft.render()
}

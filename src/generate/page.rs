//! Page module target: a card-framed page rendering the generated table
//! behind a suspense query.

use super::draft::ModuleDraft;

pub fn render() -> String {
    let mut draft = ModuleDraft::new();

    draft.import("import * as React from 'react'");
    draft.import("import { useSuspenseQuery } from '@tanstack/react-query'");
    draft.import(
        "import { Card, CardContent, CardDescription, CardHeader, CardTitle } from '@/components/ui/card'",
    );
    draft.import("import DataTable from './data-table'");
    draft.import("import { dataQuery } from './data-query'");

    draft.set_body(
        r#"export function Page() {
  useSuspenseQuery(dataQuery())

  return (
    <Card className="p-4 border-none">
      <CardHeader className="flex flex-row justify-between items-baseline">
        <div className="flex flex-col space-y-2">
          <CardTitle>Data Table</CardTitle>
          <CardDescription>
            This page allows you to view and manage your data.
          </CardDescription>
        </div>
      </CardHeader>
      <CardContent>
        <DataTable />
      </CardContent>
    </Card>
  )
}"#,
    );

    draft.render()
}

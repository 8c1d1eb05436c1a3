//! Query module target: a TanStack Query wrapper loading `data.json`.

use super::draft::ModuleDraft;

pub fn render() -> String {
    let mut draft = ModuleDraft::new();

    draft.import("import { queryOptions } from '@tanstack/react-query'");
    draft.import("import data from './data.json'");

    draft.declare(
        r#"async function getData(): Promise<Array<unknown>> {
  // Replace with actual data fetching logic
  return data
}"#,
    );

    draft.set_body(
        r#"export const dataQuery = () => {
  return queryOptions({
    queryKey: ['DATA_QUERY'],
    queryFn: () => getData(),
  })
}"#,
    );

    draft.render()
}

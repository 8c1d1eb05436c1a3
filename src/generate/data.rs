//! Data module target: the dataset as a pretty-printed `data.json`.

use crate::models::Dataset;

pub fn render(dataset: &Dataset) -> String {
    // Serializing plain JSON values back to text cannot fail.
    let mut out = serde_json::to_string_pretty(dataset).unwrap_or_else(|_| "[]".to_string());
    out.push('\n');
    out
}

//! CSV Rendering
//!
//! Minimal comma-joined export: header row, then one line per record in the
//! caller's column order. Values are written raw. Embedded commas, quotes
//! and newlines are NOT escaped, so such values break the row layout.

use serde::Serialize;
use serde_json::Value;

use crate::models::format_number;

/// Render JSON objects. Missing or null fields become empty cells.
pub fn render(rows: &[Value], headers: &[&str]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let cells: Vec<String> = headers.iter().map(|h| cell(row.get(*h))).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// Render typed rows through their JSON form.
pub fn render_rows<R: Serialize>(rows: &[R], headers: &[&str]) -> String {
    let values: Vec<Value> = rows
        .iter()
        .map(|row| serde_json::to_value(row).unwrap_or(Value::Null))
        .collect();
    render(&values, headers)
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        Some(other) => other.to_string(),
    }
}

use serde_json::Value;

use crate::core::export::to_pretty_json;
use crate::domain::model::{ParseFormat, Record};
use crate::utils::error::Result;

/// Renders a record set for terminal output in the requested format.
pub fn render(records: &[Record], format: ParseFormat) -> Result<String> {
    match format {
        ParseFormat::Json => to_pretty_json(records),
        ParseFormat::StructuredTable => Ok(render_table(records)),
    }
}

fn render_table(records: &[Record]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };
    let columns: Vec<String> = first.data.keys().cloned().collect();
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    let text = cell_display(record.get(column));
                    widths[index] = widths[index].max(text.chars().count());
                    text
                })
                .collect()
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(&columns, &widths));
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn cell_display(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use crate::domain::model::Record;
use crate::utils::error::{EtlError, Result};

/// Pulls the course table out of a full HTML document.
///
/// The first row of the first table under `<body>` supplies the column names
/// verbatim; every following row becomes one [`Record`]. Cells missing from
/// short rows are filled with `null` so downstream filters can treat them as
/// missing values.
pub fn extract_records(html: &str) -> Result<Vec<Record>> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("body table").expect("selector should parse");
    let row_selector = Selector::parse("tr").expect("selector should parse");
    let cell_selector = Selector::parse("th, td").expect("selector should parse");

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| malformed("no table found under the document body"))?;

    let mut rows = table.select(&row_selector);
    let header = rows
        .next()
        .ok_or_else(|| malformed("course table has no header row"))?;

    // Column names stay verbatim here; the cleaner owns whitespace trimming.
    let columns: Vec<String> = header
        .select(&cell_selector)
        .map(|cell| cell.text().collect())
        .collect();
    if columns.is_empty() {
        return Err(malformed("course table header row has no cells"));
    }

    let mut records = Vec::new();
    for row in rows {
        let cells: Vec<String> = row.select(&cell_selector).map(|c| cell_text(&c)).collect();
        if cells.is_empty() {
            continue;
        }
        let record = columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let value = cells
                    .get(index)
                    .map(|text| Value::String(text.clone()))
                    .unwrap_or(Value::Null);
                (column.clone(), value)
            })
            .collect();
        records.push(record);
    }

    Ok(records)
}

fn malformed(message: &str) -> EtlError {
    EtlError::MalformedDocumentError {
        message: message.to_string(),
    }
}

/// Collapses the markup whitespace around and inside cell text.
fn cell_text(cell: &ElementRef) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

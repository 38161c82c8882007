use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::error::EtlError;

/// Department-name column of the course table, in the source locale.
pub const DEPT_FIELD: &str = "系所名稱";
/// Remaining-seats column of the course table.
pub const REMAIN_FIELD: &str = "餘額";

/// One course row as an ordered column-name-to-value mapping.
///
/// Cells are strings as extracted; the cleaner types the seat column. A
/// missing cell (and the no-limit seat marker) is `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self { data: Map::new() }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.data.get(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.data.insert(column.into(), value);
    }

    /// True when any cell is null.
    pub fn has_missing(&self) -> bool {
        self.data.values().any(Value::is_null)
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

/// In-memory representation requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFormat {
    StructuredTable,
    Json,
}

impl FromStr for ParseFormat {
    type Err = EtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structured-table" => Ok(Self::StructuredTable),
            "json" => Ok(Self::Json),
            other => Err(EtlError::UnsupportedFormatError {
                format: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ParseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructuredTable => f.write_str("structured-table"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Outcome of one parse call: real course rows, or the expected empty result
/// when the listing only carries the no-course placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Courses(Vec<Record>),
    NoneAvailable,
}

/// Filtering and ordering applied after cleaning and projection.
#[derive(Debug, Clone, PartialEq)]
pub struct SortOptions {
    pub drop_incomplete: bool,
    pub drop_zero_remaining: bool,
    pub sort_field: String,
    pub ascending: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            drop_incomplete: true,
            drop_zero_remaining: true,
            sort_field: REMAIN_FIELD.to_string(),
            ascending: false,
        }
    }
}

/// What one engine run produced.
#[derive(Debug, Clone)]
pub struct EtlSummary {
    pub available: bool,
    pub records: Vec<Record>,
    pub output_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_from_str() {
        assert_eq!(
            "structured-table".parse::<ParseFormat>().unwrap(),
            ParseFormat::StructuredTable
        );
        assert_eq!("json".parse::<ParseFormat>().unwrap(), ParseFormat::Json);
    }

    #[test]
    fn test_parse_format_rejects_unknown_value() {
        let err = "dataframe".parse::<ParseFormat>().unwrap_err();
        assert!(matches!(
            err,
            EtlError::UnsupportedFormatError { format } if format == "dataframe"
        ));
    }

    #[test]
    fn test_record_preserves_column_order() {
        let mut record = Record::new();
        record.insert("b", Value::from("2"));
        record.insert("a", Value::from("1"));
        let columns: Vec<&String> = record.data.keys().collect();
        assert_eq!(columns, ["b", "a"]);
    }
}

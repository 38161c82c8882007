use serde_json::Value;

use crate::domain::model::{Record, DEPT_FIELD, REMAIN_FIELD};
use crate::utils::error::{EtlError, Result};

/// Sentinel printed in place of a number when a course is full.
const SEATS_FULL: &str = "額滿";
/// Sentinel for a course without any seat cap.
const NO_SEAT_LIMIT: &str = "不限";
/// Department cell of the placeholder row on an empty result page.
const NO_COURSE_SENTINEL: &str = "查無課程資訊";

/// Normalizes extracted rows: trims column names, drops header rows the
/// paginated markup repeats as data, and types the seat column. Fails with
/// [`EtlError::NoCourseAvailableError`] when only the no-course placeholder
/// survives.
pub fn clean_records(records: Vec<Record>) -> Result<Vec<Record>> {
    let mut cleaned = Vec::with_capacity(records.len());
    for record in records {
        let mut trimmed: Record = record
            .data
            .into_iter()
            .map(|(column, value)| (column.trim().to_string(), value))
            .collect();

        match trimmed.get(DEPT_FIELD) {
            None => {
                return Err(EtlError::MalformedDocumentError {
                    message: format!("course table has no {} column", DEPT_FIELD),
                })
            }
            // Header row repeated by the next result page.
            Some(Value::String(dept)) if dept == DEPT_FIELD => continue,
            _ => {}
        }

        if let Some(cell) = trimmed.data.get_mut(REMAIN_FIELD) {
            let converted = clean_remain(cell)?;
            *cell = converted;
        }
        cleaned.push(trimmed);
    }

    ensure_available(&cleaned)?;
    Ok(cleaned)
}

/// Seat-count sentinel rules: full means zero, no-limit becomes the null
/// marker, anything else must be a plain number.
fn clean_remain(cell: &Value) -> Result<Value> {
    match cell {
        Value::Null => Ok(Value::Null),
        Value::String(text) if text == SEATS_FULL => Ok(Value::from(0.0)),
        Value::String(text) if text == NO_SEAT_LIMIT => Ok(Value::Null),
        Value::String(text) => {
            let seats: f64 = text.parse().map_err(|_| EtlError::DataFormatError {
                value: text.clone(),
            })?;
            Ok(Value::from(seats))
        }
        other => Ok(other.clone()),
    }
}

/// A result set is available only if some row's department differs from the
/// no-course placeholder; an emptied set is unavailable too.
fn ensure_available(records: &[Record]) -> Result<()> {
    let available = records.iter().any(|record| {
        !matches!(record.get(DEPT_FIELD), Some(Value::String(dept)) if dept == NO_COURSE_SENTINEL)
    });
    if available {
        Ok(())
    } else {
        Err(EtlError::NoCourseAvailableError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dept: &str, remain: &str) -> Record {
        let mut record = Record::new();
        record.insert(" 系所名稱 ", Value::from(dept));
        record.insert(" 餘額 ", Value::from(remain));
        record
    }

    #[test]
    fn test_clean_trims_column_names() {
        let cleaned = clean_records(vec![record("AN101", "3")]).unwrap();
        let columns: Vec<&String> = cleaned[0].data.keys().collect();
        assert_eq!(columns, [DEPT_FIELD, REMAIN_FIELD]);
    }

    #[test]
    fn test_clean_drops_repeated_header_rows() {
        let rows = vec![
            record("AN101", "3"),
            record("系所名稱", "餘額"),
            record("AN102", "5"),
            record("系所名稱", "餘額"),
        ];
        let cleaned = clean_records(rows).unwrap();
        assert_eq!(cleaned.len(), 2);
    }

    #[test]
    fn test_seat_sentinel_conversion() {
        let rows = vec![record("AN101", "額滿"), record("AN102", "不限"), record("AN103", "3")];
        let cleaned = clean_records(rows).unwrap();
        assert_eq!(cleaned[0].get(REMAIN_FIELD), Some(&Value::from(0.0)));
        assert_eq!(cleaned[1].get(REMAIN_FIELD), Some(&Value::Null));
        assert_eq!(cleaned[2].get(REMAIN_FIELD), Some(&Value::from(3.0)));
    }

    #[test]
    fn test_missing_seat_cell_stays_null() {
        let mut row = Record::new();
        row.insert(DEPT_FIELD, Value::from("AN101"));
        row.insert(REMAIN_FIELD, Value::Null);
        let cleaned = clean_records(vec![row]).unwrap();
        assert_eq!(cleaned[0].get(REMAIN_FIELD), Some(&Value::Null));
    }

    #[test]
    fn test_unparseable_seat_value_is_data_format_error() {
        let err = clean_records(vec![record("AN101", "many")]).unwrap_err();
        assert!(matches!(err, EtlError::DataFormatError { value } if value == "many"));
    }

    #[test]
    fn test_all_placeholder_rows_means_no_course() {
        let rows = vec![
            record("查無課程資訊", "1"),
            record("查無課程資訊", "2"),
        ];
        let err = clean_records(rows).unwrap_err();
        assert!(matches!(err, EtlError::NoCourseAvailableError));
    }

    #[test]
    fn test_one_real_row_keeps_the_set_available() {
        let rows = vec![record("查無課程資訊", "1"), record("AN101", "3")];
        assert!(clean_records(rows).is_ok());
    }

    #[test]
    fn test_only_header_rows_means_no_course() {
        let err = clean_records(vec![record("系所名稱", "餘額")]).unwrap_err();
        assert!(matches!(err, EtlError::NoCourseAvailableError));
    }

    #[test]
    fn test_missing_department_column_is_malformed() {
        let mut row = Record::new();
        row.insert("科目", Value::from("AN101"));
        let err = clean_records(vec![row]).unwrap_err();
        assert!(matches!(err, EtlError::MalformedDocumentError { .. }));
    }
}

use std::cmp::Ordering;

use serde_json::Value;

use crate::domain::model::{Record, SortOptions, REMAIN_FIELD};
use crate::utils::error::{EtlError, Result};

/// Applies the configured filters, then a stable sort on the chosen field.
///
/// Total order over cell values: a null cell (no seat cap) outranks every
/// finite count, numbers order before strings, and ties keep their prior
/// relative order.
pub fn sort_courses(records: &mut Vec<Record>, options: &SortOptions) -> Result<()> {
    if options.drop_incomplete {
        records.retain(|record| !record.has_missing());
    }
    if options.drop_zero_remaining {
        require_field(records, REMAIN_FIELD)?;
        records.retain(|record| {
            !matches!(
                record.get(REMAIN_FIELD).and_then(Value::as_f64),
                Some(seats) if seats == 0.0
            )
        });
    }

    require_field(records, &options.sort_field)?;
    if options.ascending {
        records.sort_by(|a, b| {
            compare_cells(a.get(&options.sort_field), b.get(&options.sort_field))
        });
    } else {
        records.sort_by(|a, b| {
            compare_cells(b.get(&options.sort_field), a.get(&options.sort_field))
        });
    }
    Ok(())
}

fn require_field(records: &[Record], field: &str) -> Result<()> {
    match records.first() {
        Some(record) if record.get(field).is_none() => Err(EtlError::UnknownFieldError {
            field: field.to_string(),
        }),
        _ => Ok(()),
    }
}

fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.unwrap_or(&Value::Null);
    let b = b.unwrap_or(&Value::Null);
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Number(_), _) => Ordering::Less,
        (_, Value::Number(_)) => Ordering::Greater,
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (x, y) => x.to_string().cmp(&y.to_string()),
    }
}

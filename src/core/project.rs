use crate::domain::model::Record;
use crate::utils::error::{EtlError, Result};

/// Column projection with mutually exclusive include/exclude lists: setting
/// one clears the other, so at most one mode is active at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldFilter {
    mode: Mode,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum Mode {
    #[default]
    Passthrough,
    Include(Vec<String>),
    Exclude(Vec<String>),
}

impl FieldFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only these columns, in this order. Clears any exclusion list.
    pub fn include(&mut self, fields: Vec<String>) {
        self.mode = Mode::Include(fields);
    }

    /// Drop these columns, preserving the remaining original order. Clears
    /// any inclusion list.
    pub fn exclude(&mut self, fields: Vec<String>) {
        self.mode = Mode::Exclude(fields);
    }

    pub fn include_fields(&self) -> &[String] {
        match &self.mode {
            Mode::Include(fields) => fields,
            _ => &[],
        }
    }

    pub fn exclude_fields(&self) -> &[String] {
        match &self.mode {
            Mode::Exclude(fields) => fields,
            _ => &[],
        }
    }

    /// Narrows every record to the active selection. Listing a column absent
    /// from the record schema is an error in either mode.
    pub fn apply(&self, records: Vec<Record>) -> Result<Vec<Record>> {
        match &self.mode {
            Mode::Include(fields) if !fields.is_empty() => records
                .into_iter()
                .map(|record| project_include(record, fields))
                .collect(),
            Mode::Exclude(fields) if !fields.is_empty() => records
                .into_iter()
                .map(|record| project_exclude(record, fields))
                .collect(),
            _ => Ok(records),
        }
    }
}

fn project_include(record: Record, fields: &[String]) -> Result<Record> {
    fields
        .iter()
        .map(|field| {
            record
                .get(field)
                .cloned()
                .map(|value| (field.clone(), value))
                .ok_or_else(|| unknown_field(field))
        })
        .collect()
}

fn project_exclude(record: Record, fields: &[String]) -> Result<Record> {
    for field in fields {
        if record.get(field).is_none() {
            return Err(unknown_field(field));
        }
    }
    Ok(record
        .data
        .into_iter()
        .filter(|(column, _)| !fields.iter().any(|field| field == column))
        .collect())
}

fn unknown_field(field: &str) -> EtlError {
    EtlError::UnknownFieldError {
        field: field.to_string(),
    }
}

use crate::core::clean::clean_records;
use crate::core::extract::extract_records;
use crate::core::project::FieldFilter;
use crate::core::sort::sort_courses;
use crate::domain::model::{ParseOutcome, Record, SortOptions};
use crate::utils::error::{EtlError, Result};

/// Facade over the extraction, cleaning and projection stages for one raw
/// course document.
pub struct CourseParser {
    html: String,
    fields: FieldFilter,
}

impl CourseParser {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            fields: FieldFilter::new(),
        }
    }

    /// Keep only these columns. Replaces any exclusion list.
    pub fn include_fields(&mut self, fields: Vec<String>) {
        self.fields.include(fields);
    }

    /// Drop these columns. Replaces any inclusion list.
    pub fn exclude_fields(&mut self, fields: Vec<String>) {
        self.fields.exclude(fields);
    }

    pub fn fields(&self) -> &FieldFilter {
        &self.fields
    }

    /// Strict parse: extraction, cleaning and projection, failing with
    /// `NoCourseAvailableError` when the document only carries the no-course
    /// placeholder.
    pub fn parse_records(&self) -> Result<Vec<Record>> {
        let records = extract_records(&self.html)?;
        let records = clean_records(records)?;
        self.fields.apply(records)
    }

    /// Like `parse_records`, but surfaces the expected empty listing as a
    /// tagged outcome instead of an error.
    pub fn parse(&self) -> Result<ParseOutcome> {
        match self.parse_records() {
            Ok(records) => Ok(ParseOutcome::Courses(records)),
            Err(EtlError::NoCourseAvailableError) => Ok(ParseOutcome::NoneAvailable),
            Err(error) => Err(error),
        }
    }

    /// Parse, then filter and sort the surviving rows.
    pub fn parse_sorted(&self, options: &SortOptions) -> Result<ParseOutcome> {
        match self.parse()? {
            ParseOutcome::Courses(mut records) => {
                sort_courses(&mut records, options)?;
                Ok(ParseOutcome::Courses(records))
            }
            outcome => Ok(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DEPT_FIELD, REMAIN_FIELD};
    use serde_json::Value;

    // Paginated listing: a duplicate header row rides along as data.
    const SAMPLE: &str = r#"
        <html><body><table>
            <tr><th>系所名稱</th><th>餘額</th></tr>
            <tr><td>AN101</td><td>額滿</td></tr>
            <tr><td>AN102</td><td>不限</td></tr>
            <tr><td>AN103</td><td>3</td></tr>
            <tr><td>系所名稱</td><td>餘額</td></tr>
        </table></body></html>
    "#;

    const EMPTY: &str = r#"
        <html><body><table>
            <tr><th>系所名稱</th><th>餘額</th></tr>
            <tr><td>查無課程資訊</td></tr>
        </table></body></html>
    "#;

    #[test]
    fn test_parse_cleans_the_duplicate_header_row() {
        let parser = CourseParser::new(SAMPLE);
        let records = parser.parse_records().unwrap();
        assert_eq!(records.len(), 3);
        let seats: Vec<&Value> = records
            .iter()
            .map(|r| r.get(REMAIN_FIELD).unwrap())
            .collect();
        assert_eq!(
            seats,
            [&Value::from(0.0), &Value::Null, &Value::from(3.0)]
        );
    }

    #[test]
    fn test_parse_sorted_keeps_only_open_courses() {
        let parser = CourseParser::new(SAMPLE);
        let outcome = parser.parse_sorted(&SortOptions::default()).unwrap();
        let ParseOutcome::Courses(records) = outcome else {
            panic!("expected course rows");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(DEPT_FIELD), Some(&Value::from("AN103")));
        assert_eq!(records[0].get(REMAIN_FIELD), Some(&Value::from(3.0)));
    }

    #[test]
    fn test_parse_records_fails_on_empty_listing() {
        let parser = CourseParser::new(EMPTY);
        let err = parser.parse_records().unwrap_err();
        assert!(matches!(err, EtlError::NoCourseAvailableError));
    }

    #[test]
    fn test_parse_tags_empty_listing_as_outcome() {
        let parser = CourseParser::new(EMPTY);
        assert_eq!(parser.parse().unwrap(), ParseOutcome::NoneAvailable);
    }

    #[test]
    fn test_projection_applies_after_cleaning() {
        let mut parser = CourseParser::new(SAMPLE);
        parser.include_fields(vec![DEPT_FIELD.to_string()]);
        let records = parser.parse_records().unwrap();
        let columns: Vec<&String> = records[0].data.keys().collect();
        assert_eq!(columns, [DEPT_FIELD]);
    }
}

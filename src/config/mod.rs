pub mod query;

use clap::Parser;

use crate::adapters::crawler::{COURSE_QUERY_URL, CURRENT_COURSE_URL};
use crate::core::export::DEFAULT_EXPORT_DIR;
use crate::domain::model::{SortOptions, REMAIN_FIELD};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_digits, validate_non_empty_string, validate_path, validate_url, Validate,
};
use query::CourseQuery;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-etl")]
#[command(about = "Fetch an NCKU course listing and export it as JSON")]
pub struct CliConfig {
    /// Department code, e.g. "AN"
    pub dept_no: String,

    /// Academic year, zero-padded to four digits when sent
    #[arg(requires = "semester")]
    pub year: Option<String>,

    /// Semester within the year
    #[arg(requires = "year")]
    pub semester: Option<String>,

    /// In-memory result format: structured-table or json
    #[arg(long, default_value = "structured-table")]
    pub format: String,

    /// Keep only these columns, in order
    #[arg(long, value_delimiter = ',', conflicts_with = "exclude_fields")]
    pub include_fields: Vec<String>,

    /// Drop these columns
    #[arg(long, value_delimiter = ',')]
    pub exclude_fields: Vec<String>,

    /// Filter and sort the parsed records
    #[arg(long)]
    pub sort: bool,

    /// Column to sort on
    #[arg(long, default_value = REMAIN_FIELD)]
    pub sort_field: String,

    /// Sort smallest first instead of largest first
    #[arg(long)]
    pub ascending: bool,

    /// Keep rows with missing values when sorting
    #[arg(long)]
    pub keep_incomplete: bool,

    /// Keep rows with zero remaining seats when sorting
    #[arg(long)]
    pub keep_zero: bool,

    /// Directory the JSON export is written into
    #[arg(long, default_value = DEFAULT_EXPORT_DIR)]
    pub output_path: String,

    /// Export file name; defaults to the department code
    #[arg(long)]
    pub output_file: Option<String>,

    /// Endpoint for current-term queries
    #[arg(long, default_value = CURRENT_COURSE_URL)]
    pub current_url: String,

    /// Endpoint for explicit year/semester queries
    #[arg(long, default_value = COURSE_QUERY_URL)]
    pub query_url: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("dept_no", &self.dept_no)?;
        if let Some(year) = &self.year {
            validate_digits("year", year, 4)?;
        }
        if let Some(semester) = &self.semester {
            validate_digits("semester", semester, 2)?;
        }
        validate_non_empty_string("sort_field", &self.sort_field)?;
        validate_path("output_path", &self.output_path)?;
        validate_url("current_url", &self.current_url)?;
        validate_url("query_url", &self.query_url)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn query(&self) -> CourseQuery {
        match (&self.year, &self.semester) {
            (Some(year), Some(semester)) => CourseQuery::with_term(&self.dept_no, year, semester),
            _ => CourseQuery::new(&self.dept_no),
        }
    }

    fn parse_format(&self) -> &str {
        &self.format
    }

    fn include_fields(&self) -> &[String] {
        &self.include_fields
    }

    fn exclude_fields(&self) -> &[String] {
        &self.exclude_fields
    }

    fn sort_options(&self) -> Option<SortOptions> {
        self.sort.then(|| SortOptions {
            drop_incomplete: !self.keep_incomplete,
            drop_zero_remaining: !self.keep_zero,
            sort_field: self.sort_field.clone(),
            ascending: self.ascending,
        })
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> Option<&str> {
        self.output_file.as_deref()
    }
}

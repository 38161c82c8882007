use async_trait::async_trait;

use crate::core::export::Exporter;
use crate::core::parser::CourseParser;
use crate::domain::model::{ParseFormat, ParseOutcome, Record};
use crate::domain::ports::{ConfigProvider, CourseSource, Pipeline, Storage};
use crate::utils::error::Result;

/// Wires the fetch collaborator, the parser stages and the export backend
/// into the three-stage pipeline the engine drives.
pub struct CoursePipeline<F: CourseSource, S: Storage, C: ConfigProvider> {
    source: F,
    exporter: Exporter<S>,
    config: C,
}

impl<F: CourseSource, S: Storage, C: ConfigProvider> CoursePipeline<F, S, C> {
    pub fn new(source: F, storage: S, config: C) -> Self {
        Self {
            source,
            exporter: Exporter::new(storage),
            config,
        }
    }
}

#[async_trait]
impl<F: CourseSource, S: Storage, C: ConfigProvider> Pipeline for CoursePipeline<F, S, C> {
    async fn extract(&self) -> Result<String> {
        let query = self.config.query();
        tracing::debug!("Fetching course list for department {}", query.department());
        self.source.fetch_raw_html(&query).await
    }

    async fn transform(&self, html: &str) -> Result<ParseOutcome> {
        // The format selector is validated up front even though both formats
        // share the record representation here.
        let format: ParseFormat = self.config.parse_format().parse()?;
        tracing::debug!("Parsing course table ({})", format);

        let mut parser = CourseParser::new(html);
        if !self.config.include_fields().is_empty() {
            parser.include_fields(self.config.include_fields().to_vec());
        } else if !self.config.exclude_fields().is_empty() {
            parser.exclude_fields(self.config.exclude_fields().to_vec());
        }

        match self.config.sort_options() {
            Some(options) => parser.parse_sorted(&options),
            None => parser.parse(),
        }
    }

    async fn load(&self, records: &[Record]) -> Result<String> {
        let file_name = self
            .config
            .output_file()
            .map(str::to_string)
            .unwrap_or_else(|| self.config.query().department().to_string());

        let written = self.exporter.export(records, &file_name).await?;
        Ok(format!("{}/{}", self.config.output_path(), written))
    }
}

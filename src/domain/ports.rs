use async_trait::async_trait;

use crate::config::query::CourseQuery;
use crate::domain::model::{ParseOutcome, Record, SortOptions};
use crate::utils::error::Result;

/// Fetch collaborator: resolves a course query to a raw UTF-8 HTML document.
#[async_trait]
pub trait CourseSource: Send + Sync {
    async fn fetch_raw_html(&self, query: &CourseQuery) -> Result<String>;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn query(&self) -> CourseQuery;
    fn parse_format(&self) -> &str;
    fn include_fields(&self) -> &[String];
    fn exclude_fields(&self) -> &[String];
    fn sort_options(&self) -> Option<SortOptions>;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, html: &str) -> Result<ParseOutcome>;
    async fn load(&self, records: &[Record]) -> Result<String>;
}

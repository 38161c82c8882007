use async_trait::async_trait;
use reqwest::Client;

use crate::config::query::CourseQuery;
use crate::domain::ports::CourseSource;
use crate::utils::error::Result;

/// Course listing for the current term.
pub const CURRENT_COURSE_URL: &str = "http://140.116.165.74/qry/qry001.php";
/// Course listing for an explicit year and semester.
pub const COURSE_QUERY_URL: &str = "http://140.116.165.74/qry/qry002.php";

/// Thin GET wrapper around the NCKU course query endpoints.
#[derive(Debug, Clone)]
pub struct NckuCrawler {
    client: Client,
    current_url: String,
    query_url: String,
}

impl NckuCrawler {
    pub fn new() -> Self {
        Self::with_endpoints(CURRENT_COURSE_URL, COURSE_QUERY_URL)
    }

    /// Point the crawler at alternative endpoints (mirrors, test servers).
    pub fn with_endpoints(current_url: impl Into<String>, query_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            current_url: current_url.into(),
            query_url: query_url.into(),
        }
    }
}

impl Default for NckuCrawler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseSource for NckuCrawler {
    async fn fetch_raw_html(&self, query: &CourseQuery) -> Result<String> {
        // qry002 answers explicit year+semester queries, qry001 the current term.
        let url = if query.is_term_query() {
            &self.query_url
        } else {
            &self.current_url
        };
        tracing::info!("Fetching {} (dept_no={})", url, query.department());

        let response = self
            .client
            .get(url)
            .query(&query.params())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

use crate::domain::model::{EtlSummary, ParseOutcome};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives one fetch → parse → export run.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<EtlSummary> {
        tracing::info!("Starting course ETL process");

        let raw_html = self.pipeline.extract().await?;
        tracing::info!("Fetched {} bytes of course HTML", raw_html.len());

        match self.pipeline.transform(&raw_html).await? {
            ParseOutcome::NoneAvailable => {
                tracing::warn!("No course available for this query");
                Ok(EtlSummary {
                    available: false,
                    records: Vec::new(),
                    output_path: None,
                })
            }
            ParseOutcome::Courses(records) => {
                tracing::info!("Parsed {} course records", records.len());
                let output_path = self.pipeline.load(&records).await?;
                tracing::info!("Output saved to: {}", output_path);
                Ok(EtlSummary {
                    available: true,
                    records,
                    output_path: Some(output_path),
                })
            }
        }
    }
}

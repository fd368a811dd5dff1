use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting split...");

        // Extract
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());

        // Transform
        let result = self.pipeline.transform(records)?;
        tracing::info!(
            "Transformed {} companies, {} with candidates",
            result.companies.len(),
            result.candidate_files.len()
        );

        // Load
        let summary = self.pipeline.load(result)?;
        tracing::info!("Companies saved to: {}", summary.companies_path.display());

        Ok(summary)
    }
}

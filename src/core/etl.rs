use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once; returns where the document was written.
    pub fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting pricebook extraction");

        let rows = self.pipeline.extract()?;
        tracing::info!("Extracted {} data rows", rows.len());

        let result = self.pipeline.transform(rows)?;
        tracing::info!(
            "Built document with {} countries",
            result.document.countries.len()
        );

        let output_path = self.pipeline.load(result)?;
        tracing::info!(
            "Output saved to: {} in {:?}",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}

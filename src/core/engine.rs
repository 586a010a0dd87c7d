use crate::core::{GenerationReport, Pipeline};
use crate::utils::error::Result;

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<GenerationReport> {
        tracing::info!("Starting wrapper generation");

        tracing::info!("Loading config...");
        let config = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} function(s) with linkage macro {}",
            config.functions.len(),
            config.linkage_macro()
        );

        tracing::info!("Rendering wrappers...");
        let sources = self.pipeline.transform(config).await?;
        tracing::info!("Rendered {} C wrapper(s)", sources.symbols.len());

        tracing::info!("Writing outputs...");
        let report = self.pipeline.load(sources).await?;
        if let (Some(header), Some(implementation)) =
            (&report.header_path, &report.implementation_path)
        {
            tracing::info!("Header saved to: {}", header);
            tracing::info!("Implementation saved to: {}", implementation);
        }

        Ok(report)
    }
}

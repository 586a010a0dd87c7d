use crate::codegen;
use crate::config::{ConfigFormat, WrapperConfig};
use crate::core::{ConfigProvider, GeneratedSources, GenerationReport, Pipeline, Storage};
use crate::utils::error::{Result, ScrapperError};
use crate::utils::validation::Validate;

/// Reads a wrapper config from storage, renders it and writes both outputs.
pub struct WrapperPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    dry_run: bool,
}

impl<S: Storage, C: ConfigProvider> WrapperPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            dry_run: false,
        }
    }

    /// In dry-run mode `load` reports the symbols but writes nothing.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for WrapperPipeline<S, C> {
    async fn extract(&self) -> Result<WrapperConfig> {
        let input = self.config.input_path();
        tracing::debug!("Reading wrapper config from: {}", input);

        let raw = self.storage.read_file(input).await?;
        let content = String::from_utf8(raw).map_err(|e| ScrapperError::ConfigError {
            message: format!("{} is not valid UTF-8: {}", input, e),
        })?;

        let config = WrapperConfig::from_str_with_format(&content, ConfigFormat::from_path(input))?;
        config.validate()?;

        tracing::debug!(
            "Config '{}' declares {} function(s)",
            input,
            config.functions.len()
        );
        Ok(config)
    }

    async fn transform(&self, config: WrapperConfig) -> Result<GeneratedSources> {
        codegen::render(&config)
    }

    async fn load(&self, sources: GeneratedSources) -> Result<GenerationReport> {
        if self.dry_run {
            for symbol in &sources.symbols {
                tracing::info!("Would export: {}", symbol);
            }
            return Ok(GenerationReport {
                header_path: None,
                implementation_path: None,
                symbols: sources.symbols,
            });
        }

        let header_path = self.config.header_path();
        let implementation_path = self.config.implementation_path();

        self.storage
            .write_file(header_path, sources.header.as_bytes())
            .await?;
        tracing::debug!("Wrote export header: {}", header_path);

        self.storage
            .write_file(implementation_path, sources.implementation.as_bytes())
            .await?;
        tracing::debug!("Wrote implementation: {}", implementation_path);

        Ok(GenerationReport {
            header_path: Some(header_path.to_string()),
            implementation_path: Some(implementation_path.to_string()),
            symbols: sources.symbols,
        })
    }
}

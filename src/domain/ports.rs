use crate::config::WrapperConfig;
use crate::domain::model::{GeneratedSources, GenerationReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<WrapperConfig>;
    async fn transform(&self, config: WrapperConfig) -> Result<GeneratedSources>;
    async fn load(&self, sources: GeneratedSources) -> Result<GenerationReport>;
}

/// Where the pipeline reads its config and writes its outputs.
pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn header_path(&self) -> &str;
    fn implementation_path(&self) -> &str;
}

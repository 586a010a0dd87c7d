use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem storage for generator inputs and outputs.
///
/// Relative paths resolve against `root`; absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let resolved = self.resolve(path);
        tracing::debug!("Reading {}", resolved.display());
        Ok(tokio::fs::read(&resolved).await?)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let resolved = self.resolve(path);
        if let Some(dir) = resolved.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }

        tracing::debug!("Writing {} bytes to {}", data.len(), resolved.display());
        tokio::fs::write(&resolved, data).await?;
        Ok(())
    }
}

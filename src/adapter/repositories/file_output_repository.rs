//! File Output Repository Implementation
//!
//! OutputRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::path::Path;

use crate::domain::errors::ConversionError;
use crate::domain::repositories::output_repository::OutputRepository;

/// ファイルシステムベースの出力リポジトリ
pub struct FileOutputRepository;

impl FileOutputRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputRepository for FileOutputRepository {
    async fn ensure_dir(&self, output_dir: &Path) -> Result<()> {
        tokio::fs::create_dir_all(output_dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;
        debug!("Output directory ready: {}", output_dir.display());
        Ok(())
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> std::result::Result<(), ConversionError> {
        tokio::fs::write(path, data)
            .await
            .map_err(|source| ConversionError::Create {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl Default for FileOutputRepository {
    fn default() -> Self {
        Self::new()
    }
}

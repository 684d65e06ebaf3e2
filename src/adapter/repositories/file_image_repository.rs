//! File Image Repository Implementation
//!
//! ImageSourceRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::errors::ConversionError;
use crate::domain::repositories::image_source_repository::ImageSourceRepository;
use crate::domain::services::image_filter::ImageFilterService;

/// ファイルシステムベースの入力画像リポジトリ
pub struct FileImageRepository;

impl FileImageRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 画像ファイルを発見する（内部実装）
    fn discover_images_internal(input_dir: &Path) -> Result<Vec<PathBuf>> {
        // 存在しない・ディレクトリでない・権限がない場合はここで失敗する
        fs::read_dir(input_dir)
            .with_context(|| format!("Failed to read directory: {}", input_dir.display()))?;

        let mut images = Vec::new();

        for entry in WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                // 直下の一覧そのものが取れない場合は続行できない
                Err(e) if e.depth() == 0 => {
                    return Err(e).with_context(|| {
                        format!("Failed to read directory: {}", input_dir.display())
                    });
                }
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", input_dir.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                debug!("Skipping non-file entry: {}", entry.path().display());
                continue;
            }

            let path = entry.into_path();
            if ImageFilterService::is_supported(&path) {
                images.push(path);
            } else {
                debug!("Skipping unsupported file: {}", path.display());
            }
        }

        images.sort();

        info!(
            "Found {} image files in {}",
            images.len(),
            input_dir.display()
        );

        Ok(images)
    }
}

#[async_trait]
impl ImageSourceRepository for FileImageRepository {
    async fn discover_images(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        // ディレクトリ走査はブロッキングI/Oなので spawn_blocking でラップ
        let input_dir = input_dir.to_path_buf();
        tokio::task::spawn_blocking(move || Self::discover_images_internal(&input_dir))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn read_image(&self, path: &Path) -> std::result::Result<Vec<u8>, ConversionError> {
        tokio::fs::read(path)
            .await
            .map_err(|source| ConversionError::Open {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl Default for FileImageRepository {
    fn default() -> Self {
        Self::new()
    }
}

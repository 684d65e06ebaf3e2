//! # Discover Images Use Case
//!
//! 変換対象画像の発見ユースケース

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::conversion_job::ConversionJob;
use crate::domain::repositories::image_source_repository::ImageSourceRepository;
use crate::domain::services::image_filter::ImageFilterService;

/// 画像発見ユースケース
///
/// 入力ディレクトリから変換対象の画像を発見し、変換ジョブを組み立てる
pub struct DiscoverImagesUseCase<R: ImageSourceRepository> {
    source_repository: Arc<R>,
}

impl<R: ImageSourceRepository> DiscoverImagesUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `source_repository` - 入力画像リポジトリ
    pub fn new(source_repository: Arc<R>) -> Self {
        Self { source_repository }
    }

    /// 変換ジョブを作成する
    ///
    /// リポジトリの結果に拡張子フィルタを再適用し、パス順に並べる
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    pub async fn execute(&self, input_dir: &Path) -> Result<ConversionJob> {
        let paths = self.source_repository.discover_images(input_dir).await?;
        Ok(ConversionJob::new(ImageFilterService::filter_supported(paths)))
    }
}

//! # Convert Images Use Case
//!
//! 画像のJPEG変換ユースケース

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::dto::conversion_config::ConversionConfig;
use crate::domain::entities::conversion_job::ConversionJob;
use crate::domain::entities::jpeg_quality::JpegQuality;
use crate::domain::errors::ConversionError;
use crate::domain::repositories::image_source_repository::ImageSourceRepository;
use crate::domain::repositories::image_transcoder::ImageTranscoder;
use crate::domain::repositories::output_repository::OutputRepository;
use crate::domain::services::output_naming::OutputNamingService;

/// 1ファイルの処理結果
#[derive(Debug)]
pub enum FileStatus {
    /// 変換成功（書き出したバイト数）
    Converted { bytes_written: usize },
    /// 変換失敗
    Failed(ConversionError),
    /// dry-runのため未処理
    Skipped,
}

/// 1ファイルの処理結果と入出力パス
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Converted { .. })
    }
}

/// 変換結果のサマリー
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl ConversionSummary {
    /// 処理したファイルの総数
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// 変換に成功したファイル数
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// 変換に失敗したファイル数
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Failed(_)))
            .count()
    }

    /// dry-runでスキップしたファイル数
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Skipped))
            .count()
    }
}

/// 画像変換ユースケース
///
/// 出力ディレクトリを用意し、ジョブ内の画像を1件ずつ順番に変換する。
/// 1ファイルの失敗は記録だけして次のファイルへ進む。
pub struct ConvertImagesUseCase<S, T, O>
where
    S: ImageSourceRepository,
    T: ImageTranscoder,
    O: OutputRepository,
{
    source_repository: Arc<S>,
    transcoder: Arc<T>,
    output_repository: Arc<O>,
}

impl<S, T, O> ConvertImagesUseCase<S, T, O>
where
    S: ImageSourceRepository,
    T: ImageTranscoder,
    O: OutputRepository,
{
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `source_repository` - 入力画像リポジトリ
    /// * `transcoder` - 画像トランスコーダ
    /// * `output_repository` - 出力リポジトリ
    pub fn new(source_repository: Arc<S>, transcoder: Arc<T>, output_repository: Arc<O>) -> Self {
        Self {
            source_repository,
            transcoder,
            output_repository,
        }
    }

    /// ジョブ内の全画像を変換する
    ///
    /// # Errors
    ///
    /// 出力ディレクトリを作成できない場合のみエラーを返す
    pub async fn execute(
        &self,
        job: &ConversionJob,
        config: &ConversionConfig,
    ) -> Result<ConversionSummary> {
        self.execute_with_progress(job, config, |_| {}).await
    }

    /// ジョブ内の全画像を変換し、1ファイル終わるごとに `on_file` を呼ぶ
    ///
    /// # Arguments
    ///
    /// * `job` - 変換ジョブ
    /// * `config` - 変換設定
    /// * `on_file` - 各ファイルの処理結果を受け取るコールバック
    ///
    /// # Returns
    ///
    /// 変換結果のサマリー
    ///
    /// # Errors
    ///
    /// 出力ディレクトリを作成できない場合のみエラーを返す
    pub async fn execute_with_progress<F>(
        &self,
        job: &ConversionJob,
        config: &ConversionConfig,
        mut on_file: F,
    ) -> Result<ConversionSummary>
    where
        F: FnMut(&FileOutcome),
    {
        if !config.dry_run {
            self.output_repository
                .ensure_dir(&config.output_dir)
                .await
                .with_context(|| {
                    format!(
                        "Failed to create output directory: {}",
                        config.output_dir.display()
                    )
                })?;
        }

        let mut summary = ConversionSummary::default();

        for input in job.iter() {
            let output = OutputNamingService::output_path_for(input, &config.output_dir);

            let status = if config.dry_run {
                debug!("Dry run, skipping {}", input.display());
                FileStatus::Skipped
            } else {
                match self.convert_one(input, &output, config.quality).await {
                    Ok(bytes_written) => {
                        info!(
                            "Converted {} -> {} ({} bytes)",
                            input.display(),
                            output.display(),
                            bytes_written
                        );
                        FileStatus::Converted { bytes_written }
                    }
                    Err(e) => {
                        warn!("Failed to process {}: {}", input.display(), e);
                        FileStatus::Failed(e)
                    }
                }
            };

            let outcome = FileOutcome {
                input: input.to_path_buf(),
                output,
                status,
            };
            on_file(&outcome);
            summary.outcomes.push(outcome);
        }

        Ok(summary)
    }

    /// 1ファイルを変換する。出力ファイルはエンコード成功後にのみ作成される
    async fn convert_one(
        &self,
        input: &Path,
        output: &Path,
        quality: JpegQuality,
    ) -> std::result::Result<usize, ConversionError> {
        let data = self.source_repository.read_image(input).await?;
        let jpeg = self
            .transcoder
            .transcode_to_jpeg(input, data, quality)
            .await?;
        self.output_repository.write_file(output, &jpeg).await?;
        Ok(jpeg.len())
    }
}

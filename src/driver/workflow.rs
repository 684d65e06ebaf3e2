//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::adapter::codec::jpeg_transcoder::ImageCrateTranscoder;
use crate::adapter::repositories::file_image_repository::FileImageRepository;
use crate::adapter::repositories::file_output_repository::FileOutputRepository;
use crate::application::dto::conversion_config::ConversionConfig;
use crate::application::use_cases::convert_images::{
    ConversionSummary, ConvertImagesUseCase, FileOutcome, FileStatus,
};
use crate::application::use_cases::discover_images::DiscoverImagesUseCase;

/// Format the console line for one processed file
pub fn describe_outcome(outcome: &FileOutcome) -> String {
    let name = outcome
        .input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| outcome.input.display().to_string());

    match &outcome.status {
        FileStatus::Converted { .. } => format!("Successfully processed {}", name),
        FileStatus::Failed(e) => {
            format!("Failed to process {}: {}", outcome.input.display(), e)
        }
        FileStatus::Skipped => format!(
            "Would convert {} -> {}",
            name,
            outcome.output.display()
        ),
    }
}

/// Image Conversion Workflow
pub struct ConversionWorkflow {
    config: ConversionConfig,
    discover_use_case: DiscoverImagesUseCase<FileImageRepository>,
    convert_use_case:
        ConvertImagesUseCase<FileImageRepository, ImageCrateTranscoder, FileOutputRepository>,
}

impl ConversionWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: ConversionConfig) -> Self {
        // Repository implementations
        let source_repo = Arc::new(FileImageRepository::new());
        let transcoder = Arc::new(ImageCrateTranscoder::new());
        let output_repo = Arc::new(FileOutputRepository::new());

        // Use Cases construction
        let discover_use_case = DiscoverImagesUseCase::new(source_repo.clone());
        let convert_use_case = ConvertImagesUseCase::new(source_repo, transcoder, output_repo);

        Self {
            config,
            discover_use_case,
            convert_use_case,
        }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Execute the conversion workflow
    ///
    /// Fatal errors (input listing, output directory creation) are returned;
    /// per-file failures are reported and counted in the summary.
    pub async fn execute(&self) -> Result<ConversionSummary> {
        info!("Starting image conversion...");
        info!(
            "Quality: {}, dry run: {}",
            self.config.quality, self.config.dry_run
        );

        println!("Target folder: {}", self.config.input_dir.display());

        let job = self
            .discover_use_case
            .execute(&self.config.input_dir)
            .await?;
        println!("Total images: {}", job.len());

        if self.config.dry_run {
            println!("Dry-run mode (nothing will be written)");
        } else {
            println!("Output folder: {}", self.config.output_dir.display());
        }

        let summary = self
            .convert_use_case
            .execute_with_progress(&job, &self.config, |outcome| {
                let line = describe_outcome(outcome);
                if matches!(outcome.status, FileStatus::Failed(_)) {
                    eprintln!("{}", line);
                } else {
                    println!("{}", line);
                }
            })
            .await?;

        if !self.config.dry_run {
            println!(
                "Converted {} of {} images ({} failed)",
                summary.succeeded(),
                summary.total(),
                summary.failed()
            );
        }
        println!("Done");

        Ok(summary)
    }
}

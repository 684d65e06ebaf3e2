//! Workflow Integration Tests
//!
//! ConversionWorkflow の統合テスト

use image::{ImageFormat, Rgb, RgbImage};
use jpegify::adapter::config::Config;
use jpegify::application::dto::conversion_config::ConversionConfig;
use jpegify::domain::entities::jpeg_quality::JpegQuality;
use jpegify::driver::workflow::ConversionWorkflow;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// テスト用の画像を作成
fn sample_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let noise = (x.wrapping_mul(13) ^ y.wrapping_mul(7)) % 48;
        Rgb([
            ((x * 255 / width) as u8).wrapping_add(noise as u8),
            ((y * 255 / height) as u8).wrapping_add(noise as u8),
            ((x * y) % 256) as u8,
        ])
    })
}

fn write_png(dir: &Path, name: &str) {
    sample_image(48, 32)
        .save_with_format(dir.join(name), ImageFormat::Png)
        .unwrap();
}

fn write_jpeg(dir: &Path, name: &str) {
    sample_image(40, 40)
        .save_with_format(dir.join(name), ImageFormat::Jpeg)
        .unwrap();
}

fn config_for(input: &Path, quality: u8) -> ConversionConfig {
    ConversionConfig::new(
        input.to_path_buf(),
        input.join("output"),
        JpegQuality::new(quality).unwrap(),
        false,
    )
}

fn output_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

fn assert_is_jpeg(path: &PathBuf) {
    let data = fs::read(path).unwrap();
    let decoded = image::load_from_memory_with_format(&data, ImageFormat::Jpeg);
    assert!(decoded.is_ok(), "{} should be a valid JPEG", path.display());
}

#[tokio::test]
async fn test_workflow_converts_supported_images() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path();
    write_png(input, "a.png");
    write_jpeg(input, "b.JPEG");
    write_jpeg(input, "c.jpg");
    fs::write(input.join("notes.txt"), "not an image").unwrap();
    fs::write(input.join("anim.gif"), "GIF89a").unwrap();

    let workflow = ConversionWorkflow::new(config_for(input, 90));
    let summary = workflow.execute().await.unwrap();

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.succeeded(), 3);
    assert_eq!(summary.failed(), 0);

    let output = input.join("output");
    assert_eq!(output_names(&output), vec!["a.jpg", "b.jpg", "c.jpg"]);
    for name in ["a.jpg", "b.jpg", "c.jpg"] {
        assert_is_jpeg(&output.join(name));
    }
}

#[tokio::test]
async fn test_workflow_corrupt_file_does_not_abort_run() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path();
    fs::write(input.join("a_broken.png"), b"\x89PNG\r\n\x1a\ngarbage").unwrap();
    write_png(input, "b_good.png");

    let workflow = ConversionWorkflow::new(config_for(input, 90));
    let summary = workflow.execute().await.unwrap();

    assert_eq!(summary.total(), 2);
    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.failed(), 1);

    let output = input.join("output");
    assert!(!output.join("a_broken.jpg").exists());
    assert_is_jpeg(&output.join("b_good.jpg"));
}

#[tokio::test]
async fn test_workflow_creates_output_dir_without_matches() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path();
    fs::write(input.join("readme.md"), "# nothing here").unwrap();

    let config = ConversionConfig::new(
        input.to_path_buf(),
        input.join("nested").join("output"),
        JpegQuality::default(),
        false,
    );
    let summary = ConversionWorkflow::new(config).execute().await.unwrap();

    assert_eq!(summary.total(), 0);
    assert!(input.join("nested").join("output").is_dir());
}

#[tokio::test]
async fn test_workflow_rerun_overwrites_identically() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path();
    write_png(input, "photo.png");

    let workflow = ConversionWorkflow::new(config_for(input, 80));
    workflow.execute().await.unwrap();
    let first = fs::read(input.join("output").join("photo.jpg")).unwrap();

    let summary = workflow.execute().await.unwrap();
    let second = fs::read(input.join("output").join("photo.jpg")).unwrap();

    assert_eq!(summary.failed(), 0);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_workflow_quality_affects_size() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path();
    sample_image(160, 120)
        .save_with_format(input.join("big.png"), ImageFormat::Png)
        .unwrap();

    let low_dir = temp_dir.path().join("low");
    let high_dir = temp_dir.path().join("high");

    for (dir, quality) in [(&low_dir, 10), (&high_dir, 100)] {
        let config = ConversionConfig::new(
            input.to_path_buf(),
            dir.clone(),
            JpegQuality::new(quality).unwrap(),
            false,
        );
        ConversionWorkflow::new(config).execute().await.unwrap();
    }

    let low = fs::metadata(low_dir.join("big.jpg")).unwrap().len();
    let high = fs::metadata(high_dir.join("big.jpg")).unwrap().len();
    assert!(high >= low, "q100 ({high}) should not be smaller than q10 ({low})");
}

#[tokio::test]
async fn test_workflow_missing_input_dir_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let result = ConversionWorkflow::new(config_for(&missing, 90))
        .execute()
        .await;

    assert!(result.is_err());
    assert!(!missing.join("output").exists());
}

#[tokio::test]
async fn test_workflow_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path();
    write_png(input, "a.png");

    let config = ConversionConfig::new(
        input.to_path_buf(),
        input.join("output"),
        JpegQuality::default(),
        true,
    );
    let summary = ConversionWorkflow::new(config).execute().await.unwrap();

    assert_eq!(summary.skipped(), 1);
    assert!(!input.join("output").exists());
}

#[tokio::test]
async fn test_workflow_from_resolved_config() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("pics");
    fs::create_dir(&input).unwrap();
    write_png(&input, "x.png");

    let config = Config {
        input: Some(input.to_string_lossy().to_string()),
        output: None,
        quality: 90,
        dry_run: false,
    }
    .resolve()
    .unwrap();

    assert_eq!(config.output_dir, input.join("output"));

    let summary = ConversionWorkflow::new(config).execute().await.unwrap();
    assert_eq!(summary.succeeded(), 1);
    assert!(input.join("output").join("x.jpg").is_file());
}

//! jpegify - Batch JPEG re-encoder
//!
//! フォルダ内の画像をJPEGに変換する

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use jpegify::driver::{Args, ConversionWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Resolve configuration once; it is immutable afterwards
    let config = args.to_config().resolve()?;

    let workflow = ConversionWorkflow::new(config);

    workflow.execute().await?;

    Ok(())
}

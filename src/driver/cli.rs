//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::adapter::config::Config;
use crate::domain::entities::jpeg_quality::JpegQuality;

/// フォルダ内のPNG/JPEG画像をJPEGに一括変換するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "jpegify")]
#[command(about = "Batch re-encode PNG/JPEG images in a folder as JPEG", long_about = None)]
pub struct Args {
    /// Input directory [default: ~/Downloads/twitter_media_harvest]
    #[arg(long)]
    pub input: Option<String>,

    /// Output directory [default: <input>/output]
    #[arg(long)]
    pub output: Option<String>,

    /// Output image quality (1-100)
    #[arg(
        short = 'q',
        long = "q",
        default_value_t = JpegQuality::DEFAULT,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub quality: u8,

    /// Dry run mode - list the files that would be converted without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// 未解決の設定に変換
    pub fn to_config(&self) -> Config {
        Config {
            input: self.input.clone(),
            output: self.output.clone(),
            quality: self.quality,
            dry_run: self.dry_run,
        }
    }
}

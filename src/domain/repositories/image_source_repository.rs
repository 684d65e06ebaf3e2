//! # Image Source Repository Trait
//!
//! 入力画像の発見と読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::ConversionError;

/// 入力画像リポジトリ
///
/// 入力ディレクトリの走査と画像ファイルの読み込みを担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageSourceRepository: Send + Sync {
    /// 変換対象の画像ファイルを発見する
    ///
    /// 直下のエントリのみを対象とし、サブディレクトリは辿らない。
    ///
    /// # Arguments
    ///
    /// * `input_dir` - 入力ディレクトリのパス
    ///
    /// # Returns
    ///
    /// 許可リストの拡張子を持つ通常ファイルのパス
    ///
    /// # Errors
    ///
    /// ディレクトリが存在しない、または読み取れない場合にエラーを返す（実行全体が中断される）
    async fn discover_images(&self, input_dir: &Path) -> Result<Vec<PathBuf>>;

    /// 画像ファイルの内容を読み込む
    ///
    /// # Errors
    ///
    /// ファイルを開けない場合に `ConversionError::Open` を返す
    async fn read_image(&self, path: &Path) -> std::result::Result<Vec<u8>, ConversionError>;
}

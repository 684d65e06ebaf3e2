//! # Output Repository Trait
//!
//! 変換結果の書き出しを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::ConversionError;

/// 出力リポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OutputRepository: Send + Sync {
    /// 出力ディレクトリを作成する（親ディレクトリも含む。既に存在する場合は何もしない）
    ///
    /// # Errors
    ///
    /// 作成できない場合にエラーを返す（実行全体が中断される）
    async fn ensure_dir(&self, output_dir: &Path) -> Result<()>;

    /// ファイルを書き出す。既存のファイルは上書きする
    ///
    /// # Errors
    ///
    /// ファイルを作成できない場合に `ConversionError::Create` を返す
    async fn write_file(&self, path: &Path, data: &[u8]) -> std::result::Result<(), ConversionError>;
}

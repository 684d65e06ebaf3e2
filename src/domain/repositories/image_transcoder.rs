//! # Image Transcoder Trait
//!
//! 画像のデコードとJPEGへの再エンコードを抽象化

use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::jpeg_quality::JpegQuality;
use crate::domain::errors::ConversionError;

/// 画像トランスコーダ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageTranscoder: Send + Sync {
    /// 画像データをデコードし、指定品質のJPEGとしてエンコードする
    ///
    /// # Arguments
    ///
    /// * `source` - 元ファイルのパス（エラーメッセージ用）
    /// * `data` - 元画像のバイト列（PNG または JPEG）
    /// * `quality` - JPEG品質
    ///
    /// # Returns
    ///
    /// JPEGストリームのバイト列
    ///
    /// # Errors
    ///
    /// デコード失敗時は `ConversionError::Decode`、エンコード失敗時は `ConversionError::Encode`
    async fn transcode_to_jpeg(
        &self,
        source: &Path,
        data: Vec<u8>,
        quality: JpegQuality,
    ) -> Result<Vec<u8>, ConversionError>;
}

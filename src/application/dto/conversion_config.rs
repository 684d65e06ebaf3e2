//! # Conversion Configuration DTO
//!
//! 変換設定のData Transfer Object

use std::path::PathBuf;

use crate::domain::entities::jpeg_quality::JpegQuality;

/// 変換設定
///
/// 起動時に一度だけ解決され、以降は変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// 入力ディレクトリ
    pub input_dir: PathBuf,
    /// 出力ディレクトリ
    pub output_dir: PathBuf,
    /// JPEG品質
    pub quality: JpegQuality,
    /// trueの場合、対象の一覧表示のみで書き込みを行わない
    pub dry_run: bool,
}

impl ConversionConfig {
    /// 新しい変換設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use jpegify::application::dto::conversion_config::ConversionConfig;
    /// use jpegify::domain::entities::jpeg_quality::JpegQuality;
    ///
    /// let config = ConversionConfig::new(
    ///     PathBuf::from("/data/images"),
    ///     PathBuf::from("/data/images/output"),
    ///     JpegQuality::new(80).unwrap(),
    ///     false,
    /// );
    ///
    /// assert_eq!(config.quality.value(), 80);
    /// assert!(!config.dry_run);
    /// ```
    pub fn new(input_dir: PathBuf, output_dir: PathBuf, quality: JpegQuality, dry_run: bool) -> Self {
        Self {
            input_dir,
            output_dir,
            quality,
            dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_config_new() {
        let config = ConversionConfig::new(
            PathBuf::from("/in"),
            PathBuf::from("/in/output"),
            JpegQuality::default(),
            true,
        );

        assert_eq!(config.input_dir, PathBuf::from("/in"));
        assert_eq!(config.output_dir, PathBuf::from("/in/output"));
        assert_eq!(config.quality.value(), 90);
        assert!(config.dry_run);
    }

    #[test]
    fn test_conversion_config_clone() {
        let config = ConversionConfig::new(
            PathBuf::from("/in"),
            PathBuf::from("/out"),
            JpegQuality::new(10).unwrap(),
            false,
        );

        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}

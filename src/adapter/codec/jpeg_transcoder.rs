//! JPEG Transcoder Implementation
//!
//! `image` クレートによる ImageTranscoder の実装

use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use std::path::{Path, PathBuf};

use crate::domain::entities::jpeg_quality::JpegQuality;
use crate::domain::errors::ConversionError;
use crate::domain::repositories::image_transcoder::ImageTranscoder;

/// Decodes PNG/JPEG data (format sniffed from the bytes) and re-encodes it as baseline JPEG.
pub struct ImageCrateTranscoder;

impl ImageCrateTranscoder {
    pub fn new() -> Self {
        Self
    }

    /// 同期版のトランスコード処理
    fn transcode_sync(
        source: &Path,
        data: &[u8],
        quality: JpegQuality,
    ) -> Result<Vec<u8>, ConversionError> {
        let img = image::load_from_memory(data).map_err(|e| ConversionError::Decode {
            path: source.to_path_buf(),
            source: Box::new(e),
        })?;

        // JPEG has no alpha channel
        let rgb = img.into_rgb8();

        let mut buf = Vec::new();
        {
            let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality.value());
            encoder
                .encode_image(&rgb)
                .map_err(|e| ConversionError::Encode {
                    path: source.to_path_buf(),
                    source: Box::new(e),
                })?;
        }

        Ok(buf)
    }
}

#[async_trait]
impl ImageTranscoder for ImageCrateTranscoder {
    async fn transcode_to_jpeg(
        &self,
        source: &Path,
        data: Vec<u8>,
        quality: JpegQuality,
    ) -> Result<Vec<u8>, ConversionError> {
        let path: PathBuf = source.to_path_buf();
        tokio::task::spawn_blocking(move || Self::transcode_sync(&path, &data, quality))
            .await
            .map_err(|e| ConversionError::Encode {
                path: source.to_path_buf(),
                source: Box::new(e),
            })?
    }
}

impl Default for ImageCrateTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

//! # Domain Errors
//!
//! ファイル単位で回復可能なエラーの定義

use std::path::PathBuf;

use thiserror::Error;

/// デコーダ/エンコーダ由来のエラー
pub type CodecError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 1ファイルの変換失敗
///
/// どのバリアントも実行全体を中断しない。呼び出し側は記録して次のファイルへ進む。
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("failed to create file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
}

impl ConversionError {
    /// 失敗したファイルのパス
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Open { path, .. }
            | Self::Decode { path, .. }
            | Self::Create { path, .. }
            | Self::Encode { path, .. } => path,
        }
    }
}

/// 品質値のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QualityError {
    #[error("quality must be between 1 and 100, got {0}")]
    OutOfRange(u8),
}

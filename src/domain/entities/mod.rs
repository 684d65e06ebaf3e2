//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **ConversionJob**: 変換対象ファイルの一覧
//! - **JpegQuality**: JPEG品質のバリューオブジェクト

pub mod conversion_job;
pub mod jpeg_quality;

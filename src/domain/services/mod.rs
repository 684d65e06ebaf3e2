//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! - **ImageFilterService**: 拡張子による変換対象の判定
//! - **OutputNamingService**: 出力ファイル名の決定

pub mod image_filter;
pub mod output_naming;

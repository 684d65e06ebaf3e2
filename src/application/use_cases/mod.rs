//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverImagesUseCase**: 変換対象画像の発見
//! - **ConvertImagesUseCase**: 画像のJPEG変換と書き出し

pub mod convert_images;
pub mod discover_images;

//! # Domain Layer
//!
//! 画像変換の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - ファイルシステムや画像コーデックについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（ConversionJob, JpegQualityなど）
//! - **errors**: ファイル単位の変換エラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（拡張子フィルタ、出力ファイル名）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;

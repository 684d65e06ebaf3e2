//! # jpegify
//!
//! フォルダ内の PNG / JPEG 画像を指定品質の JPEG に一括で再エンコードするツール
//!
//! クリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 変換ジョブ、品質、拡張子フィルタなどの核心ルール（外部依存なし）
//! - **Application層**: 画像の発見と変換のユースケース
//! - **Adapter層**: ファイルシステム、`image` クレート、設定解決
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

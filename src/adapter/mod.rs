//! Adapter Layer
//!
//! 外部システム（ファイルシステム、画像コーデック）との統合

pub mod codec;
pub mod config;
pub mod repositories;

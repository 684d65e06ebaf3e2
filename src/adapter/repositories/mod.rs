//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod file_image_repository;
pub mod file_output_repository;

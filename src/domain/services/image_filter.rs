//! # Image Filter Service
//!
//! 拡張子の許可リストによる変換対象の判定

use std::path::{Path, PathBuf};

/// 変換対象として扱う拡張子（小文字、ドットなし）
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// 拡張子フィルタサービス
pub struct ImageFilterService;

impl ImageFilterService {
    /// パスの拡張子が許可リストに含まれるか判定（大文字小文字を区別しない）
    ///
    /// # Arguments
    ///
    /// * `path` - 判定するファイルパス
    ///
    /// # Returns
    ///
    /// 拡張子が `png` / `jpg` / `jpeg` のいずれかなら `true`
    pub fn is_supported(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                SUPPORTED_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    /// 許可リストに含まれるパスだけを残す
    pub fn filter_supported<I>(paths: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        paths
            .into_iter()
            .filter(|path| Self::is_supported(path))
            .collect()
    }
}

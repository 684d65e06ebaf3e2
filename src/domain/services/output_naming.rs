//! # Output Naming Service
//!
//! 入力ファイルから出力ファイルのパスを決定する

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 出力ファイルの拡張子
pub const OUTPUT_EXTENSION: &str = "jpg";

/// 出力ファイル名サービス
pub struct OutputNamingService;

impl OutputNamingService {
    /// `<output_dir>/<拡張子を除いたファイル名>.jpg` を返す
    ///
    /// # 例
    ///
    /// ```
    /// use std::path::{Path, PathBuf};
    /// use jpegify::domain::services::output_naming::OutputNamingService;
    ///
    /// let out = OutputNamingService::output_path_for(Path::new("/in/photo.PNG"), Path::new("/out"));
    /// assert_eq!(out, PathBuf::from("/out/photo.jpg"));
    /// ```
    pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
        output_dir.join(Self::output_file_name(input))
    }

    /// 出力ファイル名（ディレクトリなし）
    pub fn output_file_name(input: &Path) -> OsString {
        let mut name = input
            .file_stem()
            .map(|stem| stem.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(OUTPUT_EXTENSION);
        name
    }
}

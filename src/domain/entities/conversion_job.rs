//! # ConversionJob Entity
//!
//! 1回の実行で変換するファイルの一覧

use std::path::{Path, PathBuf};

/// 変換ジョブ
///
/// スキャンで見つかった入力ファイルのパス。常にパスの辞書順で保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionJob {
    paths: Vec<PathBuf>,
}

impl ConversionJob {
    /// 新しい変換ジョブを作成
    ///
    /// # Arguments
    ///
    /// * `paths` - 入力ファイルのパス（順不同で可）
    pub fn new(mut paths: Vec<PathBuf>) -> Self {
        paths.sort();
        Self { paths }
    }

    /// ジョブ内のファイル数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// ジョブが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// パスへの参照を返す
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// パスの所有権を移動して返す
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

impl From<Vec<PathBuf>> for ConversionJob {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::new(paths)
    }
}

impl From<ConversionJob> for Vec<PathBuf> {
    fn from(job: ConversionJob) -> Self {
        job.into_paths()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_job_new_sorts_paths() {
        let job = ConversionJob::new(vec![
            PathBuf::from("/in/c.png"),
            PathBuf::from("/in/a.jpg"),
            PathBuf::from("/in/b.jpeg"),
        ]);

        assert_eq!(
            job.paths(),
            &[
                PathBuf::from("/in/a.jpg"),
                PathBuf::from("/in/b.jpeg"),
                PathBuf::from("/in/c.png"),
            ]
        );
    }

    #[test]
    fn test_conversion_job_empty() {
        let job = ConversionJob::default();
        assert_eq!(job.len(), 0);
        assert!(job.is_empty());
    }

    #[test]
    fn test_conversion_job_from_vec() {
        let job: ConversionJob = vec![PathBuf::from("/in/x.png")].into();
        assert_eq!(job.len(), 1);
        assert!(!job.is_empty());
    }

    #[test]
    fn test_conversion_job_into_vec() {
        let job = ConversionJob::new(vec![PathBuf::from("/in/b.png"), PathBuf::from("/in/a.png")]);

        let paths: Vec<PathBuf> = job.into();

        assert_eq!(paths[0], PathBuf::from("/in/a.png"));
        assert_eq!(paths[1], PathBuf::from("/in/b.png"));
    }

    #[test]
    fn test_conversion_job_iter() {
        let job = ConversionJob::new(vec![PathBuf::from("/in/a.png")]);
        let collected: Vec<&Path> = job.iter().collect();
        assert_eq!(collected, vec![Path::new("/in/a.png")]);
    }
}

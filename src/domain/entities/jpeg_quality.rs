//! # JpegQuality Value Object
//!
//! JPEGエンコード品質（1〜100）

use std::fmt;

use crate::domain::errors::QualityError;

/// JPEG品質
///
/// 値が大きいほど高品質・大容量になる。範囲外の値は作成できない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JpegQuality(u8);

impl JpegQuality {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 90;

    /// 新しい品質値を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use jpegify::domain::entities::jpeg_quality::JpegQuality;
    ///
    /// let quality = JpegQuality::new(75).unwrap();
    /// assert_eq!(quality.value(), 75);
    ///
    /// // 範囲外
    /// assert!(JpegQuality::new(0).is_err());
    /// assert!(JpegQuality::new(101).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, QualityError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QualityError::OutOfRange(value))
        }
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for JpegQuality {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u8> for JpegQuality {
    type Error = QualityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for JpegQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_default_is_90() {
        assert_eq!(JpegQuality::default().value(), 90);
    }

    #[test]
    fn test_quality_bounds() {
        assert!(JpegQuality::new(1).is_ok());
        assert!(JpegQuality::new(100).is_ok());
        assert!(matches!(
            JpegQuality::new(0),
            Err(QualityError::OutOfRange(0))
        ));
        assert!(matches!(
            JpegQuality::new(101),
            Err(QualityError::OutOfRange(101))
        ));
    }

    #[test]
    fn test_quality_try_from() {
        let quality: JpegQuality = 42u8.try_into().unwrap();
        assert_eq!(quality.value(), 42);
    }

    #[test]
    fn test_quality_display() {
        assert_eq!(JpegQuality::new(55).unwrap().to_string(), "55");
    }
}

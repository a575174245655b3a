//! # 图像容器格式
//!
//! 边界层只接受 `jpg`、`png`、`gif` 三种格式 (不区分大小写)，
//! 其余取值在调用图像编解码器之前即被拒绝。

use crate::constants::SUPPORTED_FORMATS;
use crate::error::StegoError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverFormat {
    Jpg,
    Png,
    Gif,
}

impl CoverFormat {
    /// 根据文件扩展名推断格式。
    pub fn from_path(path: &Path) -> Result<Self, StegoError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        ext.parse()
    }

    /// 对应的 `image` crate 格式。
    pub fn image_format(self) -> image::ImageFormat {
        match self {
            CoverFormat::Jpg => image::ImageFormat::Jpeg,
            CoverFormat::Png => image::ImageFormat::Png,
            CoverFormat::Gif => image::ImageFormat::Gif,
        }
    }

    /// PNG 以外的格式在重新编码时会破坏最低有效位。
    pub fn is_lossless(self) -> bool {
        matches!(self, CoverFormat::Png)
    }

    pub fn extension(self) -> &'static str {
        match self {
            CoverFormat::Jpg => SUPPORTED_FORMATS[0],
            CoverFormat::Png => SUPPORTED_FORMATS[1],
            CoverFormat::Gif => SUPPORTED_FORMATS[2],
        }
    }
}

impl FromStr for CoverFormat {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpg" => Ok(CoverFormat::Jpg),
            "png" => Ok(CoverFormat::Png),
            "gif" => Ok(CoverFormat::Gif),
            _ => Err(StegoError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for CoverFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

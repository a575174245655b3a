//! # 编解码边界模块
//!
//! 在压缩图像字节与像素网格之间往返：校验参数、调用 `image` 解码、
//! 交给隐写核心处理，再按原格式重新编码。
//!
//! 所有参数校验都在解码图像之前完成并立即返回。
//! JPEG 与 GIF 在重新编码时是有损的，隐藏的数据只能在 PNG 中保留下来。

use crate::channel::PixelGrid;
use crate::error::{Result, StegoError};
use crate::format::CoverFormat;
use crate::steganography::{capacity, embed, extract, max_payload_len};
use std::io::Cursor;
use tracing::{debug, warn};

/// 载体图像的尺寸与容量信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverInfo {
    pub width: u32,
    pub height: u32,
    pub capacity: usize,
    pub max_payload: usize,
}

/// 将负载隐藏到压缩图像中，返回同一格式的新图像字节。
///
/// 校验顺序：图像字节非空、格式受支持、负载非空；随后才解码图像。
pub fn encode(image_bytes: &[u8], format: &str, payload: &[u8]) -> Result<Vec<u8>> {
    let format = check_arguments(image_bytes, format)?;
    if payload.is_empty() {
        return Err(StegoError::EmptyPayload);
    }

    if !format.is_lossless() {
        warn!(%format, "Re-encoding to a lossy format will not preserve the hidden payload");
    }

    let mut grid = load(image_bytes, format)?;
    embed(&mut grid, payload)?;

    let mut out = Cursor::new(Vec::new());
    grid.write_to(&mut out, format.image_format())?;
    debug!(%format, bytes = out.get_ref().len(), "Re-encoded cover image");

    Ok(out.into_inner())
}

/// 以 UTF-8 编码文本后调用 [`encode`]。
pub fn encode_text(image_bytes: &[u8], format: &str, text: &str) -> Result<Vec<u8>> {
    encode(image_bytes, format, text.as_bytes())
}

/// 从压缩图像中提取负载字节。
pub fn decode(image_bytes: &[u8], format: &str) -> Result<Vec<u8>> {
    let format = check_arguments(image_bytes, format)?;
    let grid = load(image_bytes, format)?;
    extract(&grid)
}

/// 提取负载并按 UTF-8 解释，非法序列以替换字符代替。
pub fn decode_text(image_bytes: &[u8], format: &str) -> Result<String> {
    decode(image_bytes, format).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

/// 读取图像尺寸并计算其容量。
pub fn inspect(image_bytes: &[u8], format: &str) -> Result<CoverInfo> {
    let format = check_arguments(image_bytes, format)?;
    let grid = load(image_bytes, format)?;
    Ok(CoverInfo {
        width: grid.width(),
        height: grid.height(),
        capacity: capacity(&grid),
        max_payload: max_payload_len(&grid),
    })
}

fn check_arguments(image_bytes: &[u8], format: &str) -> Result<CoverFormat> {
    if image_bytes.is_empty() {
        return Err(StegoError::InvalidArgument(
            "image data must be a non-empty buffer of encoded image bytes".to_string(),
        ));
    }
    format.parse()
}

fn load(image_bytes: &[u8], format: CoverFormat) -> Result<PixelGrid> {
    let image = image::load_from_memory_with_format(image_bytes, format.image_format())?;
    debug!(
        %format,
        width = image.width(),
        height = image.height(),
        "Decoded cover image"
    );
    Ok(image.to_rgb8())
}

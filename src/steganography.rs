//! # 隐写核心模块
//!
//! 在像素网格中隐藏和提取字节负载。实际写入网格的是一个帧：
//!
//! ```text
//! [2 bytes] 负载长度 L (小端序 u16)
//! [L bytes] 负载
//! ```
//!
//! 帧按字节顺序、字节内最低位优先展开为比特，依次写入通道流的槽位 0, 1, 2, …。
//! 帧中没有魔数，提取端总是把前两个字节当作长度。

use crate::bits::bits_of;
use crate::channel::{ChannelStream, PixelGrid};
use crate::constants::{BITS_PER_BYTE, CHANNELS_PER_PIXEL, LENGTH_PREFIX_BYTES, MAX_PAYLOAD_LEN};
use crate::error::{Result, StegoError};
use tracing::debug;

/// 网格可承载的字节数 (含长度前缀)：`floor(W × H × 3 / 8)`。
pub fn capacity(grid: &PixelGrid) -> usize {
    grid.width() as usize * grid.height() as usize * CHANNELS_PER_PIXEL / BITS_PER_BYTE
}

/// 网格可隐藏的最大负载长度，同时受容量与长度前缀位宽限制。
pub fn max_payload_len(grid: &PixelGrid) -> usize {
    capacity(grid)
        .saturating_sub(LENGTH_PREFIX_BYTES)
        .min(MAX_PAYLOAD_LEN)
}

/// 为负载构建帧。
///
/// # Errors
///
/// * 负载为空时返回 [`StegoError::EmptyPayload`]。
/// * 负载超过 65535 字节时返回 [`StegoError::PayloadTooLarge`]。
pub fn build_frame(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.is_empty() {
        return Err(StegoError::EmptyPayload);
    }

    let len = u16::try_from(payload.len()).map_err(|_| StegoError::PayloadTooLarge {
        len: payload.len(),
        max: MAX_PAYLOAD_LEN,
    })?;

    let mut frame = Vec::with_capacity(LENGTH_PREFIX_BYTES + payload.len());
    frame.extend_from_slice(&len.to_le_bytes());
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// 将负载就地隐藏到网格中。
///
/// 只修改帧所占槽位对应通道的最低有效位，其余像素和通道逐字节保持不变。
/// 所有校验都在第一次写入之前完成，失败时网格不会被修改。
///
/// # Errors
///
/// * [`StegoError::EmptyPayload`] / [`StegoError::PayloadTooLarge`]：负载不合法。
/// * [`StegoError::CapacityExceeded`]：`2 + len(payload)` 超出了 [`capacity`]。
pub fn embed(grid: &mut PixelGrid, payload: &[u8]) -> Result<()> {
    let frame = build_frame(payload)?;
    let available = capacity(grid);

    if frame.len() > available {
        return Err(StegoError::CapacityExceeded {
            required: frame.len(),
            available,
        });
    }

    let mut stream = ChannelStream::writer(grid);
    if !bits_of(&frame).all(|bit| stream.put_bit(bit)) {
        return Err(StegoError::CapacityExceeded {
            required: frame.len(),
            available: stream.slot_count() / BITS_PER_BYTE,
        });
    }

    debug!(
        payload_bytes = payload.len(),
        slots_written = stream.offset(),
        capacity = available,
        "Embedded frame"
    );

    Ok(())
}

/// 按值接收网格的 [`embed`]，返回修改后的网格。
pub fn embed_owned(mut grid: PixelGrid, payload: &[u8]) -> Result<PixelGrid> {
    embed(&mut grid, payload)?;
    Ok(grid)
}

/// 从网格中提取负载。
///
/// 不校验网格是否真的由 [`embed`] 写入过：对普通图像会得到由其自然最低位
/// 拼出的任意长度与内容。
///
/// # Errors
///
/// 当网格连长度前缀都容纳不下，或前缀声明的长度超出网格容量时，
/// 返回 [`StegoError::TruncatedData`]，不会越界读取。
pub fn extract(grid: &PixelGrid) -> Result<Vec<u8>> {
    let available = capacity(grid);
    let truncated = |required| StegoError::TruncatedData {
        required,
        available,
    };

    let mut stream = ChannelStream::reader(grid);

    let mut prefix = [0u8; LENGTH_PREFIX_BYTES];
    for byte in prefix.iter_mut() {
        *byte = stream
            .next_byte()
            .ok_or_else(|| truncated(LENGTH_PREFIX_BYTES))?;
    }

    let len = u16::from_le_bytes(prefix) as usize;
    let required = LENGTH_PREFIX_BYTES + len;
    if required > available {
        return Err(truncated(required));
    }

    let payload = (0..len)
        .map(|_| stream.next_byte())
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| truncated(required))?;

    debug!(
        payload_bytes = payload.len(),
        slots_read = stream.offset(),
        capacity = available,
        "Extracted frame"
    );

    Ok(payload)
}

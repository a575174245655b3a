//! # 像素通道流模块
//!
//! 把像素网格视为一条扁平的比特介质：每个像素贡献 R、G、B 三个槽位，
//! 像素按行优先 (从左到右、从上到下) 排列。槽位 `s` 对应第 `s / 3` 个像素的
//! 第 `s % 3` 个通道的最低有效位。
//!
//! `RgbImage` 的原始样本缓冲区恰好按这一顺序交错存放，
//! 因此槽位下标与样本下标一一对应。

use crate::bits::{bits_to_byte, byte_to_bits};
use crate::constants::{BITS_PER_BYTE, CHANNELS_PER_PIXEL};
use image::RgbImage;

/// 像素网格：宽、高以及每像素 3 个 8 位通道。
pub type PixelGrid = RgbImage;

/// 槽位所属的颜色通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    fn from_index(index: usize) -> Self {
        match index {
            0 => Channel::Red,
            1 => Channel::Green,
            _ => Channel::Blue,
        }
    }
}

/// 槽位在网格中的坐标。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPosition {
    pub x: u32,
    pub y: u32,
    pub channel: Channel,
}

/// 覆盖在像素样本之上的比特游标。
///
/// 以 `&[u8]` 为底层存储时只读，以 `&mut [u8]` 为底层存储时可写。
/// 游标只存在于单次调用之内，从槽位 0 开始。
#[derive(Debug)]
pub struct ChannelStream<B> {
    samples: B,
    width: usize,
    cursor: usize,
}

impl<'a> ChannelStream<&'a [u8]> {
    /// 以只读方式打开网格。
    pub fn reader(grid: &'a PixelGrid) -> Self {
        let (width, slots) = grid_extent(grid);
        Self::new(&(**grid)[..slots], width)
    }
}

impl<'a> ChannelStream<&'a mut [u8]> {
    /// 以可写方式打开网格；未被写入的槽位保持原样。
    pub fn writer(grid: &'a mut PixelGrid) -> Self {
        let (width, slots) = grid_extent(grid);
        Self::new(&mut (**grid)[..slots], width)
    }
}

/// 网格宽度与槽位数 `3 × W × H`。底层缓冲区可能比像素区域更长，多出的部分不属于网格。
fn grid_extent(grid: &PixelGrid) -> (usize, usize) {
    let width = grid.width() as usize;
    (width, width * grid.height() as usize * CHANNELS_PER_PIXEL)
}

impl<B: AsRef<[u8]>> ChannelStream<B> {
    /// 在按 R,G,B 交错、行优先排列且恰好为 `3 × W × H` 长的样本上建立游标。
    fn new(samples: B, width: usize) -> Self {
        Self {
            samples,
            width,
            cursor: 0,
        }
    }

    /// 槽位总数，即 `3 × W × H`。
    pub fn slot_count(&self) -> usize {
        self.samples.as_ref().len()
    }

    pub fn offset(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.slot_count().saturating_sub(self.cursor)
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.slot_count()
    }

    /// 读取指定槽位的最低有效位；越界时返回 `None`。
    pub fn read_bit(&self, slot: usize) -> Option<u8> {
        self.samples.as_ref().get(slot).map(|sample| sample & 1)
    }

    /// 读取游标处的比特并前移游标。
    pub fn next_bit(&mut self) -> Option<u8> {
        let bit = self.read_bit(self.cursor)?;
        self.cursor += 1;
        Some(bit)
    }

    /// 从游标处连续读取 8 个槽位并组装为一个字节。
    /// 剩余槽位不足 8 个时返回 `None`，且游标不移动。
    pub fn next_byte(&mut self) -> Option<u8> {
        if self.remaining() < BITS_PER_BYTE {
            return None;
        }

        let mut bits = [0u8; BITS_PER_BYTE];
        for bit in bits.iter_mut() {
            *bit = self.next_bit()?;
        }
        Some(bits_to_byte(&bits))
    }

    /// 将槽位下标换算为像素坐标和通道。
    pub fn locate(&self, slot: usize) -> Option<SlotPosition> {
        if slot >= self.slot_count() || self.width == 0 {
            return None;
        }

        let pixel = slot / CHANNELS_PER_PIXEL;
        Some(SlotPosition {
            x: (pixel % self.width) as u32,
            y: (pixel / self.width) as u32,
            channel: Channel::from_index(slot % CHANNELS_PER_PIXEL),
        })
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> ChannelStream<B> {
    /// 将指定槽位的最低有效位设置为 `bit`，高 7 位不变。
    /// 越界时返回 `false` 且不做任何修改。
    pub fn write_bit(&mut self, slot: usize, bit: u8) -> bool {
        match self.samples.as_mut().get_mut(slot) {
            Some(sample) => {
                *sample = (*sample & 0xFE) | (bit & 1);
                true
            }
            None => false,
        }
    }

    /// 在游标处写入一个比特并前移游标。
    pub fn put_bit(&mut self, bit: u8) -> bool {
        let written = self.write_bit(self.cursor, bit);
        if written {
            self.cursor += 1;
        }
        written
    }

    /// 从游标处按最低位优先写入一个字节。
    /// 剩余槽位不足 8 个时不做任何修改并返回 `false`。
    pub fn put_byte(&mut self, byte: u8) -> bool {
        if self.remaining() < BITS_PER_BYTE {
            return false;
        }

        byte_to_bits(byte).iter().all(|&bit| self.put_bit(bit))
    }
}

impl<B: AsRef<[u8]>> Iterator for ChannelStream<B> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_bit()
    }
}

//! # 比特序列模块
//!
//! 字节与比特之间的双向转换。字节内部一律按最低位优先 (bit 0 到 bit 7) 排列，
//! 隐写与提取两端都依赖这一顺序。

use crate::constants::BITS_PER_BYTE;

/// 将一个字节展开为 8 个比特，下标 0 为最低有效位。
pub fn byte_to_bits(byte: u8) -> [u8; BITS_PER_BYTE] {
    std::array::from_fn(|i| (byte >> i) & 1)
}

/// 将按最低位优先排列的 8 个比特重新组装为一个字节。
/// 每个元素只取其最低位。
pub fn bits_to_byte(bits: &[u8; BITS_PER_BYTE]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0u8, |acc, (i, &bit)| acc | ((bit & 1) << i))
}

/// 将字节缓冲区按顺序展开为比特流。
pub fn bits_of(bytes: &[u8]) -> impl Iterator<Item = u8> + '_ {
    bytes.iter().flat_map(|&byte| byte_to_bits(byte))
}

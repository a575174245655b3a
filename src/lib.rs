//! # pixel_whisper 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：比特序列、像素通道流、隐写引擎，
//! 以及压缩图像字节与像素网格之间的编解码边界。

// 声明库包含的所有模块。

pub mod bits;
pub mod channel;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod format;
pub mod handler;
pub mod logging;
pub mod steganography;

pub use channel::{ChannelStream, PixelGrid};
pub use error::{Result, StegoError};
pub use format::CoverFormat;
pub use steganography::{capacity, embed, extract};

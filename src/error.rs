//! # 错误类型模块
//!
//! 隐写引擎与编解码边界层共用的错误分类。
//! 所有错误都以 `Result` 返回给调用方，引擎自身不做重试。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// 输入的图像字节或负载形态不正确，在任何图像 I/O 之前被拒绝。
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported image format '{0}', expected one of: jpg, png, gif")]
    UnsupportedFormat(String),

    #[error("A non-empty payload must be specified")]
    EmptyPayload,

    /// 负载长度超出了 2 字节长度前缀的表示范围。
    #[error("Payload of {len} bytes exceeds the {max} byte limit of the length prefix")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("Payload is too large for the cover image: required {required} bytes, available {available} bytes")]
    CapacityExceeded { required: usize, available: usize },

    /// 长度前缀 (连同其声明的数据) 超出了图像所能承载的比特数。
    #[error("Hidden data is truncated: frame needs {required} bytes, image holds {available} bytes")]
    TruncatedData { required: usize, available: usize },

    /// 图像编解码器自身的错误，原样透传。
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, StegoError>;

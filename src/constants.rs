/// 长度前缀所占的字节数。
/// 负载前面写入一个小端序的 `u16`，因此单次最多可隐藏 65535 字节。
pub const LENGTH_PREFIX_BYTES: usize = 2;

/// 单次可隐藏的最大负载长度 (字节)，由长度前缀的位宽决定。
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// 每个字节展开后的比特数。
pub const BITS_PER_BYTE: usize = 8;

/// 每个像素提供的隐写槽位数：R、G、B 三个通道各一个最低有效位。
/// Alpha 通道不参与隐写。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 边界层接受的图像容器格式 (不区分大小写)。
pub const SUPPORTED_FORMATS: [&str; 3] = ["jpg", "png", "gif"];

/// 未指定输出路径时，隐写结果图像的文件名前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本的文件名前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";

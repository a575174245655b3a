//! # 日志模块
//!
//! 为命令行程序安装 `tracing` 订阅者。库代码只发出事件，从不安装订阅者。

use tracing_subscriber::{EnvFilter, fmt};

/// 按 `-v` 次数选择默认过滤级别；设置了 `RUST_LOG` 时以其为准。
/// 日志写到 stderr，不与结果输出混在一起。
pub fn init(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "pixel_whisper=info,warn",
        _ => "pixel_whisper=debug,info",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

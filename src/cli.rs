//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，在图像的 RGB 通道中隐藏或恢复任意数据。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，在图像的 RGB 通道中隐藏或恢复任意数据。\n\
                  支持 jpg、png、gif 三种格式；只有 PNG 能在重新编码后完整保留隐藏的数据。"
)]
pub struct Cli {
    /// 提高日志详细程度 (-v 为 info，-vv 为 debug)；`RUST_LOG` 优先。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 capacity (容量)。
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 在图像中隐藏一个文件的内容或一段文本。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的数据。
    Recover(RecoverArgs),

    /// 显示图像的尺寸以及最多能隐藏多少字节。
    Capacity(CapacityArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("payload").required(true).args(["text", "message"])))]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (jpg, png, gif)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的内容的文件路径，按原始字节读取。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 直接在命令行上给出要隐藏的文本 (按 UTF-8 编码)。
    #[arg(short, long)]
    pub message: Option<String>,

    /// 结果图像的输出路径。默认为输入图像旁的 `doctored_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 图像容器格式；默认根据输入文件扩展名推断。
    #[arg(long)]
    pub format: Option<String>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复数据的输出路径。默认为输入图像旁的 `recovered_<文件名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 图像容器格式；默认根据输入文件扩展名推断。
    #[arg(long)]
    pub format: Option<String>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要检查的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 图像容器格式；默认根据输入文件扩展名推断。
    #[arg(long)]
    pub format: Option<String>,
}

//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用编解码边界以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::codec;
use crate::constants::{DOCTORED_PREFIX, RECOVERED_PREFIX};
use crate::error::StegoError;
use crate::format::CoverFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 未指定输出路径时隐写结果图像的默认路径：`<目录>/doctored_<文件名>`。
pub fn default_dest(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    image.with_file_name(format!("{DOCTORED_PREFIX}{name}"))
}

/// 未指定输出路径时恢复数据的默认路径：`<目录>/recovered_<文件名主干>.txt`。
pub fn default_recovered(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    image.with_file_name(format!("{RECOVERED_PREFIX}{stem}.txt"))
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和负载、检查隐写空间是否足够、调用编解码边界隐藏负载，
/// 最后将结果写入目标图像文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 图像格式不受支持，或无法读取输入的图像/文本文件。
/// * 负载为空，或图像没有足够的空间来隐藏负载。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let format = resolve_format(&args.image, args.format.as_deref())?;
    let dest = args.dest.unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let picture = read_image(&args.image)?;

    let payload = match (&args.text, args.message) {
        (Some(path), _) => fs::read(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        (None, Some(message)) => message.into_bytes(),
        (None, None) => anyhow::bail!("Either a text file or a message must be given."),
    };

    let doctored = match codec::encode(&picture, format.extension(), &payload) {
        Err(StegoError::CapacityExceeded {
            required,
            available,
        }) => anyhow::bail!(
            "Not enough space in the image to hide the text. \nRequired: {}, Available: {}",
            required.to_string().red().bold(),
            available.to_string().green().bold()
        ),
        other => other.with_context(|| {
            format!(
                "Failed to hide the payload in: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?,
    };

    info!(
        image = %args.image.display(),
        dest = %dest.display(),
        payload_bytes = payload.len(),
        "Payload hidden"
    );

    fs::write(&dest, doctored).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用编解码边界提取负载，
/// 最后将恢复的原始字节写入目标文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 图像格式不受支持，或无法读取输入的图像文件。
/// * 长度前缀声明的数据超出了图像容量。
/// * 目标文件已存在且未指定 `--force`，或无法写入。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let format = resolve_format(&args.image, args.format.as_deref())?;
    let dest = args.text.unwrap_or_else(|| default_recovered(&args.image));
    ensure_writable(&dest, args.force)?;

    let picture = read_image(&args.image)?;

    let text = codec::decode(&picture, format.extension()).with_context(|| {
        format!(
            "Failed to recover the hidden data from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    info!(
        image = %args.image.display(),
        dest = %dest.display(),
        payload_bytes = text.len(),
        "Payload recovered"
    );

    fs::write(&dest, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令：打印图像尺寸与可隐藏的最大字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let format = resolve_format(&args.image, args.format.as_deref())?;
    let picture = read_image(&args.image)?;

    let info = codec::inspect(&picture, format.extension()).with_context(|| {
        format!(
            "Unable to decode image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{}: {}x{} ({})",
        args.image.to_string_lossy().bold(),
        info.width,
        info.height,
        format
    );
    println!("Capacity: {} bytes", info.capacity.to_string().green().bold());
    println!(
        "Maximum payload: {} bytes",
        info.max_payload.to_string().green().bold()
    );
    Ok(())
}

fn resolve_format(image: &Path, explicit: Option<&str>) -> Result<CoverFormat> {
    let format = match explicit {
        Some(name) => name.parse(),
        None => CoverFormat::from_path(image),
    };
    format.with_context(|| {
        format!(
            "Cannot determine a supported image format for: {}",
            image.to_string_lossy().red().bold()
        )
    })
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}

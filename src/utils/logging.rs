//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// `RUST_LOG` 优先；否则 verbose 时为 debug，默认为 info。重复调用无副作用
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n出题日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .with_context(|| format!("无法写入日志文件: {}", log_file_path))?;
    Ok(())
}

/// 向日志文件追加一行
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("无法打开日志文件: {}", log_file_path))?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(model_name: &str, max_marks: i64, max_concurrent: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 看图出题模式");
    info!("🤖 模型: {}", model_name);
    info!("📝 试卷总分: {}", max_marks);
    info!("📊 最大并发数: {}", max_concurrent);
    info!("{}", "=".repeat(60));
}

/// 记录图片加载信息
pub fn log_images_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 张待处理的图片", total);
    info!("📋 最多同时处理 {} 张\n", max_concurrent);
}

/// 打印整批图片的出题结果
///
/// `output_folder` 为 JSON 试卷所在目录，`log_file_path` 为运行日志
pub fn print_final_stats(
    success: usize,
    failed: usize,
    total: usize,
    output_folder: &str,
    log_file_path: &str,
) {
    info!("{}", "=".repeat(60));
    info!(
        "🖼️ 图片出题完成 ({})",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 生成试卷: {}/{}", success, total);
    if failed > 0 {
        info!("❌ 未生成: {}（原因见日志）", failed);
    }
    info!("📂 试卷目录: {}", output_folder);
    info!("📄 运行日志: {}", log_file_path);
    info!("{}", "=".repeat(60));
}

/// 截取模型回复的开头用于日志预览
///
/// 按字符计数，超出 `max_chars` 时以 `...` 结尾
pub fn truncate_text(reply: &str, max_chars: usize) -> String {
    match reply.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &reply[..cut]),
        None => reply.to_string(),
    }
}

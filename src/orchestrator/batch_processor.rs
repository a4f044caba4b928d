//! 批量出题处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量图片的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、写日志文件头、创建模型客户端
//! 2. **批量加载**：收集所有待处理的图片
//! 3. **并发控制**：使用 Semaphore 限制同时进行的模型调用数量
//! 4. **结果输出**：每张图片写一份 JSON 试卷文档
//! 5. **全局统计**：汇总所有图片的处理结果
//!
//! 单张图片失败不影响其他图片

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{collect_image_paths, ImagePayload};
use crate::services::{DocumentWriter, LlmService, QuestionGenerator};
use crate::utils::logging::{
    append_log_line, init_log_file, log_images_loaded, log_startup, print_final_stats,
};
use crate::workflow::{SynthesisFlow, SynthesisRequest};

/// 应用主结构
pub struct App<G> {
    config: Config,
    flow: Arc<SynthesisFlow<G>>,
    writer: Arc<DocumentWriter>,
}

impl App<LlmService> {
    /// 使用真实模型初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        let generator = LlmService::new(&config);
        Self::with_generator(config, generator)
    }
}

impl<G: QuestionGenerator + 'static> App<G> {
    /// 使用指定的出题能力初始化应用
    pub fn with_generator(config: Config, generator: G) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(
            generator.model_name(),
            config.max_marks,
            config.max_concurrent_images,
        );

        let flow = SynthesisFlow::new(generator).with_verbose_logging(config.verbose_logging);
        let writer = DocumentWriter::new(&config.output_folder);

        Ok(Self {
            config,
            flow: Arc::new(flow),
            writer: Arc::new(writer),
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunStats> {
        info!("\n📁 正在扫描待处理的图片...");
        let images = collect_image_paths(&self.config).await?;

        if images.is_empty() {
            warn!("⚠️ 没有找到待处理的图片，程序结束");
            return Ok(RunStats::default());
        }

        log_images_loaded(images.len(), self.config.max_concurrent_images);

        let outcomes = self.process_all_images(images).await?;

        let mut stats = RunStats {
            total: outcomes.len(),
            ..Default::default()
        };

        for outcome in &outcomes {
            let line = match &outcome.result {
                Ok(output) => {
                    stats.success += 1;
                    format!("✅ {} → {}", outcome.image.display(), output.display())
                }
                Err(reason) => {
                    stats.failed += 1;
                    format!("❌ {} : {}", outcome.image.display(), reason)
                }
            };
            append_log_line(&self.config.output_log_file, &line)?;
        }

        append_log_line(
            &self.config.output_log_file,
            &format!("\n成功: {}/{} 失败: {}", stats.success, stats.total, stats.failed),
        )?;
        print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            &self.config.output_folder,
            &self.config.output_log_file,
        );

        Ok(stats)
    }

    /// 并发处理所有图片，结果顺序与输入一致
    async fn process_all_images(&self, images: Vec<PathBuf>) -> Result<Vec<ImageOutcome>> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_images));
        let mut handles = Vec::with_capacity(images.len());

        for image_path in &images {
            let permit = semaphore.clone().acquire_owned().await?;
            let flow = self.flow.clone();
            let writer = self.writer.clone();
            let path = image_path.clone();
            let max_marks = self.config.max_marks;

            handles.push(tokio::spawn(async move {
                let _permit = permit;
                process_image(&flow, &writer, &path, max_marks).await
            }));
        }

        let results = join_all(handles).await;

        let outcomes = images
            .into_iter()
            .zip(results)
            .map(|(image, joined)| {
                let result = match joined {
                    Ok(Ok(output)) => Ok(output),
                    Ok(Err(e)) => {
                        error!("[图片 {}] ❌ 处理失败: {}", image.display(), e);
                        Err(e.to_string())
                    }
                    Err(e) => {
                        error!("[图片 {}] 任务执行失败: {}", image.display(), e);
                        Err(e.to_string())
                    }
                };
                ImageOutcome { image, result }
            })
            .collect();

        Ok(outcomes)
    }
}

/// 处理单张图片：读取 → 出题 → 写入 JSON
async fn process_image<G: QuestionGenerator>(
    flow: &SynthesisFlow<G>,
    writer: &DocumentWriter,
    path: &Path,
    max_marks: i64,
) -> AppResult<PathBuf> {
    let image = ImagePayload::from_path(path).await?;
    let name = image.name.clone();

    let document = flow.run(&SynthesisRequest::new(image, max_marks)).await?;

    let output = writer
        .write(&name, &document)
        .await
        .map_err(|e| AppError::file_write_failed(writer.output_folder().display().to_string(), e))?;

    info!("[图片 {}] 💾 已保存至 {}", name, output.display());
    Ok(output)
}

/// 单张图片的处理结果
#[derive(Debug)]
struct ImageOutcome {
    image: PathBuf,
    result: std::result::Result<PathBuf, String>,
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

//! 试卷文档写入服务 - 业务能力层
//!
//! 只负责"把一份试卷文档写成 JSON 文件"，不关心流程

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tracing::debug;

use crate::models::AssessmentDocument;

/// 文档写入服务
pub struct DocumentWriter {
    output_folder: PathBuf,
}

impl DocumentWriter {
    pub fn new(output_folder: impl Into<PathBuf>) -> Self {
        Self {
            output_folder: output_folder.into(),
        }
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    /// 写入 `<输出目录>/<名称>.json`，已存在则覆盖
    ///
    /// # 返回
    /// 返回写入的文件路径
    pub async fn write(&self, name: &str, document: &AssessmentDocument) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_folder)
            .await
            .with_context(|| format!("无法创建输出目录: {}", self.output_folder.display()))?;

        let path = self.output_folder.join(format!("{}.json", name));
        let json = serde_json::to_string_pretty(document).context("试卷文档序列化失败")?;

        fs::write(&path, json)
            .await
            .with_context(|| format!("无法写入文件: {}", path.display()))?;

        debug!(
            "已写入 {} ({} 道小题)",
            path.display(),
            document.questions.len()
        );

        Ok(path)
    }
}

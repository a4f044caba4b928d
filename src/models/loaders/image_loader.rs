use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use crate::config::Config;
use crate::error::{AppError, FileError};
use crate::models::image::mime_type_for;

/// 列出文件夹中所有支持的图片，按文件名排序
pub async fn list_image_files(folder_path: &str) -> Result<Vec<PathBuf>> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(AppError::from(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        })
        .into());
    }

    let mut image_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if mime_type_for(&path).is_some() {
            image_files.push(path);
        } else {
            tracing::debug!("跳过非图片文件: {}", path.display());
        }
    }

    image_files.sort();
    Ok(image_files)
}

/// 按配置收集待处理图片
///
/// 设置了 `image_path` 时只处理这一张，否则扫描 `image_folder`
pub async fn collect_image_paths(config: &Config) -> Result<Vec<PathBuf>> {
    match &config.image_path {
        Some(path) => {
            let path = Path::new(path);
            if !path.is_file() {
                anyhow::bail!("图片文件不存在: {}", path.display());
            }
            Ok(vec![path.to_path_buf()])
        }
        None => list_image_files(&config.image_folder).await,
    }
}

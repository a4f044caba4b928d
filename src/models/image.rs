use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tokio::fs;

use crate::error::{AppError, AppResult, InputError};

/// 上传的图片内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// 图片名称（用于日志和输出文件名）
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// 从文件加载图片，根据扩展名判断 MIME 类型
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let mime_type = mime_type_for(path).ok_or_else(|| InputError::UnsupportedImage {
            path: path.display().to_string(),
        })?;

        let bytes = fs::read(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self::new(name, mime_type, bytes))
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// 编码为 data URL，供 Vision API 使用
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.bytes))
    }
}

/// 根据扩展名返回 MIME 类型，不支持的格式返回 None
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

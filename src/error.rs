use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入校验错误（不会调用模型）
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// 模型生成错误
    #[error("生成错误: {0}")]
    Generation(#[from] GenerationError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 输入校验错误
#[derive(Debug, Error)]
pub enum InputError {
    /// 未提供图片
    #[error("未上传图片文件")]
    MissingImage,
    /// 不支持的图片格式
    #[error("不支持的图片格式: {path}")]
    UnsupportedImage { path: String },
}

/// 模型生成错误
///
/// 对调用方而言是统一的"生成失败"，具体原因只保留在 source 中
#[derive(Debug, Error)]
pub enum GenerationError {
    /// 调用模型失败
    #[error("题目生成失败 (模型: {model})")]
    Failed {
        model: String,
        #[source]
        source: BoxError,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: BoxError,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: BoxError,
    },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必需的配置项缺失
    #[error("缺少配置项 {var_name}")]
    MissingValue { var_name: String },
    /// 配置值不合法
    #[error("配置项 {var_name} 的值 '{value}' 不合法: {reason}")]
    InvalidValue {
        var_name: String,
        value: String,
        reason: String,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建模型调用失败错误
    pub fn generation_failed(model: impl Into<String>, source: impl Into<BoxError>) -> Self {
        AppError::Generation(GenerationError::Failed {
            model: model.into(),
            source: source.into(),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: impl Into<BoxError>) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: source.into(),
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: impl Into<BoxError>) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: source.into(),
        })
    }

    /// 是否为输入校验错误
    pub fn is_input_error(&self) -> bool {
        matches!(self, AppError::Input(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_generation_failure_keeps_source() {
        let err = AppError::generation_failed("gemini-1.5-flash", anyhow::anyhow!("quota exceeded"));

        assert_eq!(err.to_string(), "生成错误: 题目生成失败 (模型: gemini-1.5-flash)");
        let inner = err.source().and_then(|e| e.source()).map(|e| e.to_string());
        assert_eq!(inner.as_deref(), Some("quota exceeded"));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_missing_image_is_input_error() {
        let err: AppError = InputError::MissingImage.into();
        assert!(err.is_input_error());
        assert_eq!(err.to_string(), "输入错误: 未上传图片文件");
    }
}

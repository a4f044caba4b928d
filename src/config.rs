use crate::error::{AppResult, ConfigError};
use crate::services::mark_allocator::{resolve_max_marks, DEFAULT_MAX_MARKS};

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 请求的试卷总分
    pub max_marks: i64,
    /// 单张图片路径（设置后只处理这一张）
    pub image_path: Option<String>,
    /// 待处理图片目录
    pub image_folder: String,
    /// JSON 输出目录
    pub output_folder: String,
    /// 同时处理的图片数量
    pub max_concurrent_images: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_marks: DEFAULT_MAX_MARKS,
            image_path: None,
            image_folder: "images".to_string(),
            output_folder: "output_json".to_string(),
            max_concurrent_images: 4,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-1.5-flash".to_string(),
            llm_max_tokens: 2048,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置，缺失或无法解析时使用默认值
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            max_marks: resolve_max_marks(get("MAX_MARKS").as_deref()),
            image_path: get("IMAGE_PATH").filter(|v| !v.trim().is_empty()),
            image_folder: get("IMAGE_FOLDER").unwrap_or(default.image_folder),
            output_folder: get("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            max_concurrent_images: get("MAX_CONCURRENT_IMAGES").and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_images),
            verbose_logging: get("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: get("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            llm_api_key: get("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: get("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: get("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            llm_max_tokens: get("LLM_MAX_TOKENS").and_then(|v| v.parse().ok()).unwrap_or(default.llm_max_tokens),
        }
    }

    /// 检查运行前必须满足的配置
    pub fn validate(&self) -> AppResult<()> {
        if self.llm_api_key.trim().is_empty() {
            return Err(ConfigError::MissingValue {
                var_name: "LLM_API_KEY".to_string(),
            }
            .into());
        }

        if self.max_concurrent_images == 0 {
            return Err(ConfigError::InvalidValue {
                var_name: "MAX_CONCURRENT_IMAGES".to_string(),
                value: "0".to_string(),
                reason: "并发数必须大于 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

//! 出题请求
//!
//! 封装"用哪张图、按多少总分出题"这一信息

use std::fmt::Display;

use crate::models::ImagePayload;
use crate::services::mark_allocator::DEFAULT_MAX_MARKS;

/// 出题请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 图片（缺失时流程直接拒绝，不调用模型）
    pub image: Option<ImagePayload>,

    /// 请求的试卷总分
    pub max_marks: i64,
}

impl SynthesisRequest {
    pub fn new(image: ImagePayload, max_marks: i64) -> Self {
        Self {
            image: Some(image),
            max_marks,
        }
    }

    /// 没有图片的请求
    pub fn without_image(max_marks: i64) -> Self {
        Self {
            image: None,
            max_marks,
        }
    }

    /// 用于日志的图片名称
    pub fn image_name(&self) -> &str {
        self.image.as_ref().map(|i| i.name.as_str()).unwrap_or("<无图片>")
    }
}

impl Default for SynthesisRequest {
    fn default() -> Self {
        Self::without_image(DEFAULT_MAX_MARKS)
    }
}

impl Display for SynthesisRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[图片 {} 总分#{}]", self.image_name(), self.max_marks)
    }
}

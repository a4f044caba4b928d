use std::future::Future;

use anyhow::Result;

use crate::models::ImagePayload;

/// 出题能力：给定提示词和图片，返回模型的原始文本回复
///
/// 生产环境由 [`LlmService`](crate::services::LlmService) 实现；
/// 普通函数或闭包 `Fn(&str, &ImagePayload) -> Result<String>` 也自动实现本 trait，
/// 便于注入确定性的替身
pub trait QuestionGenerator: Send + Sync {
    /// 模型名称（用于日志和错误信息）
    fn model_name(&self) -> &str;

    /// 调用一次模型，不做重试
    fn generate(
        &self,
        prompt: &str,
        image: &ImagePayload,
    ) -> impl Future<Output = Result<String>> + Send;
}

impl<F> QuestionGenerator for F
where
    F: Fn(&str, &ImagePayload) -> Result<String> + Send + Sync,
{
    fn model_name(&self) -> &str {
        "local-fn"
    }

    fn generate(
        &self,
        prompt: &str,
        image: &ImagePayload,
    ) -> impl Future<Output = Result<String>> + Send {
        let reply = self(prompt, image);
        async move { reply }
    }
}

//! LLM 服务 - 业务能力层
//!
//! 只负责"看图出题"的模型调用能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（如 Gemini, Azure, Doubao 等）

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImage,
        ChatCompletionRequestMessageContentPartText, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
        CreateChatCompletionRequestArgs, ImageDetail, ImageUrl,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::ImagePayload;
use crate::services::question_generator::QuestionGenerator;

/// LLM 服务
///
/// 职责：
/// - 把提示词和图片一起发给 Vision 模型
/// - 每次请求只调用一次，不重试、不流式
/// - 不解析回复内容
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    max_tokens: u32,
}

impl LlmService {
    /// 创建新的 LLM 服务
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
            max_tokens: config.llm_max_tokens,
        }
    }

    /// 发送"文字 + 图片"的单条用户消息
    ///
    /// # 参数
    /// - `prompt`: 出题提示词
    /// - `image`: 图片内容，以 data URL 形式内嵌
    ///
    /// # 返回
    /// 返回模型的文本回复（已去除首尾空白）
    pub async fn send_with_image(&self, prompt: &str, image: &ImagePayload) -> Result<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!(
            "提示词长度: {} 字符, 图片: {} ({}, {} 字节)",
            prompt.len(),
            image.name,
            image.mime_type,
            image.bytes.len()
        );

        let content_parts = vec![
            ChatCompletionRequestUserMessageContentPart::Text(
                ChatCompletionRequestMessageContentPartText {
                    text: prompt.to_string(),
                },
            ),
            ChatCompletionRequestUserMessageContentPart::ImageUrl(
                ChatCompletionRequestMessageContentPartImage {
                    image_url: ImageUrl {
                        url: image.to_data_url(),
                        detail: Some(ImageDetail::Auto),
                    },
                },
            ),
        ];

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Array(content_parts))
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .max_tokens(self.max_tokens)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            anyhow::anyhow!("LLM API 调用失败: {}", e)
        })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("LLM 返回内容为空"))?;

        Ok(content.trim().to_string())
    }
}

impl QuestionGenerator for LlmService {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn generate(&self, prompt: &str, image: &ImagePayload) -> Result<String> {
        self.send_with_image(prompt, image).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompt_builder::build_generation_prompt;
    use crate::services::response_parser::parse_response;

    /// 创建测试用的 LlmService（读取环境变量中的密钥）
    fn create_test_service() -> LlmService {
        LlmService::new(&Config::from_env())
    }

    #[test]
    fn test_service_uses_configured_model() {
        let config = Config {
            llm_model_name: "gemini-1.5-pro".to_string(),
            ..Config::default()
        };
        let service = LlmService::new(&config);

        assert_eq!(service.model_name(), "gemini-1.5-pro");
        assert_eq!(service.max_tokens, config.llm_max_tokens);
    }

    /// 测试 Vision API 看图出题
    ///
    /// 运行方式：
    /// ```bash
    /// IMAGE_PATH=path/to/image.png cargo test test_generate_from_image -- --ignored --nocapture
    /// ```
    #[tokio::test]
    #[ignore]
    async fn test_generate_from_image() {
        let _ = tracing_subscriber::fmt::try_init();

        let service = create_test_service();
        let path = std::env::var("IMAGE_PATH").expect("需要设置 IMAGE_PATH");
        let image = ImagePayload::from_path(std::path::Path::new(&path))
            .await
            .expect("读取图片失败");

        let prompt = build_generation_prompt(2);
        let response = service.generate(&prompt, &image).await;

        match response {
            Ok(text) => {
                println!("\n========== LLM 响应 ==========");
                println!("{}", text);
                println!("==============================\n");

                let fragments = parse_response(&text, 2);
                println!("解析出 {} 道小题", fragments.len());
                assert!(!fragments.is_empty());
            }
            Err(e) => {
                println!("\n❌ Vision API 调用失败: {}", e);
                panic!("Vision API 测试失败: {}", e);
            }
        }
    }
}

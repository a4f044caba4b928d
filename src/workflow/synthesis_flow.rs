//! 出题流程 - 流程层
//!
//! 核心职责：定义"一张图片"的完整出题流程
//!
//! 流程顺序：
//! 1. 校验输入（没有图片直接拒绝）
//! 2. 总分 → 题目数量 → 各层级分值
//! 3. 调用模型（只调用一次）
//! 4. 解析回复 → 组装记录 → 修正总分

use tracing::{debug, error, info, warn};

use crate::error::{AppError, AppResult, InputError};
use crate::models::AssessmentDocument;
use crate::services::{
    allocate_marks, assemble_records, build_generation_prompt, parse_response,
    question_count_for, reconcile_total, QuestionGenerator,
};
use crate::utils::logging::truncate_text;
use crate::workflow::synthesis_request::SynthesisRequest;

/// 出题流程
///
/// - 编排一次请求的完整处理过程
/// - 不持有跨请求的可变状态，可并发运行
/// - 只依赖出题能力（QuestionGenerator）
pub struct SynthesisFlow<G> {
    generator: G,
    verbose_logging: bool,
}

impl<G: QuestionGenerator> SynthesisFlow<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            verbose_logging: false,
        }
    }

    /// 打开详细日志（输出模型回复预览）
    pub fn with_verbose_logging(mut self, verbose: bool) -> Self {
        self.verbose_logging = verbose;
        self
    }

    #[cfg(test)]
    fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn run(&self, request: &SynthesisRequest) -> AppResult<AssessmentDocument> {
        // ========== 1. 输入校验 ==========
        let image = match request.image.as_ref() {
            Some(image) if !image.is_empty() => image,
            _ => {
                warn!("{} ⚠️ 未提供图片，拒绝请求", request);
                return Err(InputError::MissingImage.into());
            }
        };

        // ========== 2. 分值分配 ==========
        let max_marks = request.max_marks;
        let question_count = question_count_for(max_marks);
        let allocation = allocate_marks(max_marks, question_count);

        info!("{} 📝 请求 {} 道大题", request, question_count);

        // ========== 3. 调用模型 ==========
        let prompt = build_generation_prompt(question_count);
        let model = self.generator.model_name().to_string();

        let reply = self
            .generator
            .generate(&prompt, image)
            .await
            .map_err(|e| {
                error!("{} ❌ 题目生成失败: {:#}", request, e);
                AppError::generation_failed(&model, e)
            })?;

        if self.verbose_logging {
            info!("{} 模型回复: {}", request, truncate_text(&reply, 200));
        }

        // ========== 4. 解析与组装 ==========
        let fragments = parse_response(&reply, question_count);
        let mut questions = assemble_records(&fragments, &allocation);

        match reconcile_total(&mut questions, max_marks) {
            Some(difference) => debug!("{} 总分修正差额: {:+.2}", request, difference),
            None => warn!("{} ⚠️ 模型回复中没有可识别的小题", request),
        }

        info!(
            "{} ✓ 生成 {} 道小题，总分 {}",
            request,
            questions.len(),
            max_marks
        );

        Ok(AssessmentDocument {
            questions,
            total_questions: question_count,
            marks_requested: max_marks,
            total_marks: max_marks,
            marks_allocation: allocation,
        })
    }
}

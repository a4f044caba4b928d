//! # Question Paper Gen
//!
//! 看图出题：把一张图片交给生成模型出题，再把模型的自由文本回复
//! 整理成带布鲁姆层级和分值的结构化试卷
//!
//! ## 架构设计
//!
//! ### ① 模型层（Models）
//! - `models/` - 层级目录、片段、记录、试卷文档、图片载荷
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，都是无状态的纯函数或单次调用
//! - `mark_allocator` - 总分 → 题目数量 → 各层级分值
//! - `response_parser` / `level_cycler` / `record_assembler` - 解析、定级、组装与总分修正
//! - `LlmService` - 看图出题的模型调用能力
//!
//! ### ③ 流程层（Workflow）
//! - `SynthesisFlow` - 一张图片的完整出题流程
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量图片处理，管理并发和输出

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AssessmentDocument, BloomLevel, ImagePayload, QuestionRecord};
pub use orchestrator::{App, RunStats};
pub use services::{LlmService, QuestionGenerator};
pub use workflow::{SynthesisFlow, SynthesisRequest};

//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和并发调度：收集图片、限制并发、写出结果、汇总统计。
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<图片>)
//!     ↓
//! workflow::SynthesisFlow (处理单张图片)
//!     ↓
//! services (能力层：分值 / 解析 / 组装 / LLM / 写入)
//! ```

pub mod batch_processor;

pub use batch_processor::{App, RunStats};

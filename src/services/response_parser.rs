//! 模型回复解析 - 业务能力层
//!
//! 把模型返回的自由文本拆成"大题 / 部分 / 小题"片段。
//! 解析是宽松的：无法归类的内容直接丢弃，从不报错

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::{Part, QuestionFragment};

/// 大题分隔符
const QUESTION_DELIMITER: char = 'Q';

/// 小题行首编号，如 `a1) `、`b)`
// 字面量正则，由 test_strip_prefix 覆盖
static SUB_PART_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ab]\d*\)\s*").expect("小题编号正则无效"));

/// 解析模型回复
///
/// # 参数
/// - `raw`: 模型返回的原始文本
/// - `expected_questions`: 请求的题目数量（仅用于日志，不做校验）
///
/// # 返回
/// 按出现顺序排列的小题片段
pub fn parse_response(raw: &str, expected_questions: usize) -> Vec<QuestionFragment> {
    let mut fragments = Vec::new();

    // 第一个分隔符之前的内容（前言或空白）不属于任何大题
    let blocks = raw
        .split(QUESTION_DELIMITER)
        .skip(1)
        .filter(|block| !block.trim().is_empty());

    let mut block_count = 0;
    for (question_index, block) in blocks.enumerate() {
        block_count += 1;

        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        for part in [Part::A, Part::B] {
            let part_lines = lines.iter().filter(|line| line.starts_with(part.prefix()));

            for (sub_index, line) in part_lines.enumerate() {
                fragments.push(QuestionFragment {
                    question_index,
                    part,
                    sub_index,
                    raw_text: strip_sub_part_prefix(line),
                });
            }
        }
    }

    if block_count != expected_questions {
        debug!(
            "模型回复包含 {} 道大题，请求的是 {} 道",
            block_count, expected_questions
        );
    }

    fragments
}

/// 去掉行首的小题编号并去除空白
fn strip_sub_part_prefix(line: &str) -> String {
    SUB_PART_PREFIX.replace(line, "").trim().to_string()
}

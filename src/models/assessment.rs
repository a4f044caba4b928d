use serde::Serialize;

use crate::models::taxonomy::{BloomLevel, BLOOM_LEVELS};

/// 题目的两个大部分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    A,
    B,
}

impl Part {
    /// 层级轮换使用的部分选择子（a → 0，b → 1）
    pub fn selector(self) -> usize {
        match self {
            Part::A => 0,
            Part::B => 1,
        }
    }

    /// 行首标记字符
    pub fn prefix(self) -> char {
        match self {
            Part::A => 'a',
            Part::B => 'b',
        }
    }
}

/// 解析得到的小题片段（中间结果，不输出）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFragment {
    /// 大题序号（从0开始）
    pub question_index: usize,
    pub part: Part,
    /// 在所属部分内的序号（从0开始）
    pub sub_index: usize,
    pub raw_text: String,
}

/// 单个层级的分值分配
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub level: BloomLevel,
    pub label: &'static str,
    pub description: &'static str,
    pub weight: f64,
    pub marks_per_sub_question: f64,
}

impl AllocationEntry {
    pub fn new(level: BloomLevel, marks_per_sub_question: f64) -> Self {
        Self {
            level,
            label: level.label(),
            description: level.description(),
            weight: level.weight(),
            marks_per_sub_question,
        }
    }
}

/// 一次请求的分值分配表，按层级目录顺序存放，每个层级恰好一项
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MarksAllocation {
    entries: Vec<AllocationEntry>,
}

impl MarksAllocation {
    /// 由每个层级的小题分值构建
    pub fn from_fn(mut marks_for: impl FnMut(BloomLevel) -> f64) -> Self {
        let entries = BLOOM_LEVELS
            .iter()
            .map(|&level| AllocationEntry::new(level, marks_for(level)))
            .collect();
        Self { entries }
    }

    /// 查询某个层级的小题分值
    pub fn marks_for(&self, level: BloomLevel) -> f64 {
        self.entries[level.index()].marks_per_sub_question
    }

    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }
}

/// 最终输出的小题记录
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// 大题号（从1开始）
    pub question_number: usize,
    pub part: Part,
    /// 小题号（从1开始）
    pub sub_part: usize,
    pub text: String,
    pub marks: f64,
    pub bloom_level: BloomLevel,
    pub bloom_description: &'static str,
    pub bloom_weight: f64,
    /// 课程目标标签，如 CO1
    pub course_tag: String,
}

/// 返回给调用方的完整试卷文档
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDocument {
    pub questions: Vec<QuestionRecord>,
    pub total_questions: usize,
    pub marks_requested: i64,
    pub total_marks: i64,
    pub marks_allocation: MarksAllocation,
}

impl AssessmentDocument {
    /// 实际输出的小题分值之和
    pub fn emitted_marks(&self) -> f64 {
        self.questions.iter().map(|q| q.marks).sum()
    }
}

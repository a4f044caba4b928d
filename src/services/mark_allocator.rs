//! 分值分配 - 业务能力层
//!
//! 只负责"总分 → 题目数量 → 各层级小题分值"的计算，不关心流程

use tracing::debug;

use crate::models::MarksAllocation;

/// 未提供或无法解析总分时使用的默认总分
pub const DEFAULT_MAX_MARKS: i64 = 20;

/// 每道大题固定拆分的小题数（a、b 两部分各 2 题）
pub const SUB_QUESTIONS_PER_QUESTION: usize = 4;

/// 解析请求中的总分
///
/// 取去掉首尾空白后的可选符号与开头的连续数字，其余内容忽略；
/// 缺失、不是数字或为 0 时返回 [`DEFAULT_MAX_MARKS`]
pub fn resolve_max_marks(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_MAX_MARKS;
    };

    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let leading: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();

    match leading.parse::<i64>() {
        Ok(0) | Err(_) => DEFAULT_MAX_MARKS,
        Ok(value) => sign * value,
    }
}

/// 根据总分决定题目数量
///
/// 固定查表：25 → 2，50 → 3，100 → 5，其余一律 2
pub fn question_count_for(max_marks: i64) -> usize {
    match max_marks {
        25 => 2,
        50 => 3,
        100 => 5,
        _ => 2,
    }
}

/// 计算各层级的小题分值
///
/// 每题分值 = 总分 / 题目数，再按固定 4 道小题平均，最后乘以层级权重。
/// 同一层级的所有小题共用一个分值，与所属大题无关
pub fn allocate_marks(total_marks: i64, question_count: usize) -> MarksAllocation {
    let per_question = total_marks as f64 / question_count.max(1) as f64;
    let base_per_sub_question = per_question / SUB_QUESTIONS_PER_QUESTION as f64;

    debug!(
        "分值分配: 总分 {}, 题目数 {}, 每题 {:.4}, 每小题基础分 {:.4}",
        total_marks, question_count, per_question, base_per_sub_question
    );

    MarksAllocation::from_fn(|level| base_per_sub_question * level.weight())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BloomLevel;

    #[test]
    fn test_question_count_lookup() {
        assert_eq!(question_count_for(25), 2);
        assert_eq!(question_count_for(50), 3);
        assert_eq!(question_count_for(100), 5);

        for other in [0, -25, 20, 26, 75, 99, 1000] {
            assert_eq!(question_count_for(other), 2, "总分 {}", other);
        }
    }

    #[test]
    fn test_resolve_max_marks() {
        assert_eq!(resolve_max_marks(Some("50")), 50);
        assert_eq!(resolve_max_marks(Some(" 100 ")), 100);
        assert_eq!(resolve_max_marks(Some("25marks")), 25);
        assert_eq!(resolve_max_marks(Some("-10")), -10);
        assert_eq!(resolve_max_marks(Some("+25")), 25);

        assert_eq!(resolve_max_marks(None), DEFAULT_MAX_MARKS);
        assert_eq!(resolve_max_marks(Some("")), DEFAULT_MAX_MARKS);
        assert_eq!(resolve_max_marks(Some("abc")), DEFAULT_MAX_MARKS);
        assert_eq!(resolve_max_marks(Some("0")), DEFAULT_MAX_MARKS);
    }

    #[test]
    fn test_allocation_for_fifty_marks() {
        let allocation = allocate_marks(50, 3);

        assert_eq!(allocation.entries().len(), 6);
        assert!((allocation.marks_for(BloomLevel::Remember) - 50.0 / 3.0 / 4.0 * 0.1).abs() < 1e-12);
        assert!((allocation.marks_for(BloomLevel::Apply) - 1.25).abs() < 1e-9);
        assert!((allocation.marks_for(BloomLevel::Create) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_allocation_increases_with_weight() {
        let allocation = allocate_marks(100, 5);
        let marks: Vec<f64> = allocation
            .entries()
            .iter()
            .map(|e| e.marks_per_sub_question)
            .collect();

        for pair in marks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        // 100 / 5 / 4 = 5，乘以权重
        assert!((marks[0] - 0.5).abs() < 1e-9);
        assert!((marks[5] - 3.0).abs() < 1e-9);
    }
}

//! 记录组装 - 业务能力层
//!
//! 把解析出的片段、层级和分值合并成最终记录，并修正总分

use tracing::{debug, warn};

use crate::models::{MarksAllocation, QuestionFragment, QuestionRecord};
use crate::services::level_cycler::assign_level;

/// 组装最终记录
///
/// 每个片段对应一条记录，顺序与片段一致；分值保留两位小数
pub fn assemble_records(
    fragments: &[QuestionFragment],
    allocation: &MarksAllocation,
) -> Vec<QuestionRecord> {
    fragments
        .iter()
        .map(|fragment| {
            let level = assign_level(fragment.question_index, fragment.part);
            let marks = round_marks(allocation.marks_for(level));

            QuestionRecord {
                question_number: fragment.question_index + 1,
                part: fragment.part,
                sub_part: fragment.sub_index + 1,
                text: fragment.raw_text.clone(),
                marks,
                bloom_level: level,
                bloom_description: level.label(),
                bloom_weight: level.weight(),
                course_tag: course_tag(fragment.question_index),
            }
        })
        .collect()
}

/// 修正总分，使所有记录分值之和等于请求的总分
///
/// 差额只加到第一条记录上。没有记录时不做任何修正，返回 None；
/// 否则返回实际加上的差额。分值按 i128 的“分”计算，任意 i64 总分都不会溢出
pub fn reconcile_total(records: &mut [QuestionRecord], total_marks: i64) -> Option<f64> {
    let Some((first, _)) = records.split_first() else {
        warn!("没有可用的小题，跳过总分修正");
        return None;
    };
    let first_cents = to_cents(first.marks);

    let emitted_cents: i128 = records.iter().map(|r| to_cents(r.marks)).sum();
    let difference_cents = i128::from(total_marks) * 100 - emitted_cents;

    if difference_cents == 0 {
        return Some(0.0);
    }

    records[0].marks = from_cents(first_cents + difference_cents);

    let difference = from_cents(difference_cents);
    debug!("总分修正: 差额 {:+.2} 加到第 1 条记录", difference);
    Some(difference)
}

/// 课程目标标签（每道大题一个）
pub fn course_tag(question_index: usize) -> String {
    format!("CO{}", question_index + 1)
}

/// 四舍五入到两位小数
pub fn round_marks(marks: f64) -> f64 {
    from_cents(to_cents(marks))
}

fn to_cents(marks: f64) -> i128 {
    (marks * 100.0).round() as i128
}

fn from_cents(cents: i128) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BloomLevel, Part};
    use crate::services::mark_allocator::{allocate_marks, resolve_max_marks};
    use crate::services::response_parser::parse_response;

    fn fragment(question_index: usize, part: Part, sub_index: usize) -> QuestionFragment {
        QuestionFragment {
            question_index,
            part,
            sub_index,
            raw_text: format!("q{} {:?} {}", question_index, part, sub_index),
        }
    }

    fn full_layout(questions: usize) -> Vec<QuestionFragment> {
        let mut fragments = Vec::new();
        for q in 0..questions {
            for part in [Part::A, Part::B] {
                for sub in 0..2 {
                    fragments.push(fragment(q, part, sub));
                }
            }
        }
        fragments
    }

    fn total_cents(records: &[QuestionRecord]) -> i128 {
        records.iter().map(|r| to_cents(r.marks)).sum()
    }

    #[test]
    fn test_first_fragment_of_fifty_mark_paper() {
        let allocation = allocate_marks(50, 3);
        let records = assemble_records(&[fragment(0, Part::A, 0)], &allocation);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.bloom_level, BloomLevel::Remember);
        assert_eq!(record.marks, 0.42);
        assert_eq!(record.question_number, 1);
        assert_eq!(record.sub_part, 1);
        assert_eq!(record.course_tag, "CO1");
    }

    #[test]
    fn test_siblings_share_level_and_marks() {
        let allocation = allocate_marks(100, 5);
        let records = assemble_records(&full_layout(5), &allocation);

        assert_eq!(records.len(), 20);
        for pair in records.chunks(2) {
            assert_eq!(pair[0].bloom_level, pair[1].bloom_level);
            assert_eq!(pair[0].marks, pair[1].marks);
            assert_eq!(pair[0].part, pair[1].part);
        }
        assert_eq!(records[19].course_tag, "CO5");
        assert_eq!(records[19].bloom_level, BloomLevel::Analyze);
    }

    #[test]
    fn test_reconcile_hits_requested_total() {
        for (total, questions) in [(25, 2), (50, 3), (100, 5), (20, 2), (7, 2)] {
            let allocation = allocate_marks(total, questions);
            let mut records = assemble_records(&full_layout(questions), &allocation);
            let before: Vec<f64> = records.iter().map(|r| r.marks).collect();

            let applied = reconcile_total(&mut records, total);

            assert!(applied.is_some());
            assert_eq!(total_cents(&records), i128::from(total) * 100, "总分 {}", total);
            assert!((records.iter().map(|r| r.marks).sum::<f64>() - total as f64).abs() < 1e-9);
            // 只有第一条记录被修改
            for (record, before_marks) in records.iter().zip(&before).skip(1) {
                assert_eq!(record.marks, *before_marks);
            }
        }
    }

    #[test]
    fn test_reconcile_on_partial_reply() {
        let allocation = allocate_marks(50, 3);
        let mut records = assemble_records(&[fragment(0, Part::B, 0), fragment(1, Part::A, 0)], &allocation);

        reconcile_total(&mut records, 50);
        assert_eq!(total_cents(&records), 5000);
        assert_eq!(records[1].marks, 1.25);
    }

    #[test]
    fn test_reconcile_huge_total_does_not_overflow() {
        let layout = "Q1:\na1) x\na2) y\nb1) z\nb2) w";
        for raw in ["100000000000000000", "9223372036854775807", "-9223372036854775807"] {
            let total = resolve_max_marks(Some(raw));
            let fragments = parse_response(layout, 2);
            let mut records = assemble_records(&fragments, &allocate_marks(total, 2));

            let applied = reconcile_total(&mut records, total);

            assert!(applied.is_some(), "总分 {}", total);
            assert_eq!(records.len(), 4);
            assert!(records.iter().all(|r| r.marks.is_finite()));
            let sum: f64 = records.iter().map(|r| r.marks).sum();
            assert!(((sum - total as f64) / total as f64).abs() < 1e-9, "总分 {}", total);
        }
    }

    #[test]
    fn test_reconcile_empty_is_noop() {
        let mut records: Vec<QuestionRecord> = Vec::new();
        assert_eq!(reconcile_total(&mut records, 50), None);
        assert!(records.is_empty());
    }

    #[test]
    fn test_round_marks() {
        assert_eq!(round_marks(0.41666), 0.42);
        assert_eq!(round_marks(1.0), 1.0);
        assert_eq!(round_marks(-0.126), -0.13);
    }
}

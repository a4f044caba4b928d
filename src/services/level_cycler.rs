use crate::models::{BloomLevel, Part, BLOOM_LEVELS};

/// 为 (大题, 部分) 分配认知层级
///
/// 层级按 `(question_index * 2 + part_selector) mod 6` 在目录中轮换，
/// 同一部分内的小题层级相同
pub fn assign_level(question_index: usize, part: Part) -> BloomLevel {
    let cycle_index = (question_index * 2 + part.selector()) % BLOOM_LEVELS.len();
    BLOOM_LEVELS[cycle_index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(assign_level(0, Part::A), BloomLevel::Remember);
        assert_eq!(assign_level(0, Part::B), BloomLevel::Understand);
        assert_eq!(assign_level(1, Part::A), BloomLevel::Apply);
        assert_eq!(assign_level(1, Part::B), BloomLevel::Analyze);
        assert_eq!(assign_level(2, Part::A), BloomLevel::Evaluate);
        assert_eq!(assign_level(2, Part::B), BloomLevel::Create);
        // 第 4 题重新从头开始
        assert_eq!(assign_level(3, Part::A), BloomLevel::Remember);
        assert_eq!(assign_level(4, Part::B), BloomLevel::Analyze);
    }

    #[test]
    fn test_parts_never_share_a_level() {
        for q in 0..50 {
            assert_ne!(assign_level(q, Part::A), assign_level(q, Part::B));
            assert_eq!(assign_level(q, Part::A), assign_level(q, Part::A));
        }
    }
}

//! 布鲁姆认知层级表
//!
//! 六个固定顺序的认知层级，复杂度与权重逐级递增

use phf::phf_map;
use serde::{Serialize, Serializer};

/// 认知层级枚举（顺序即复杂度顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloomLevel {
    /// 记忆
    Remember,
    /// 理解
    Understand,
    /// 应用
    Apply,
    /// 分析
    Analyze,
    /// 评价
    Evaluate,
    /// 创造
    Create,
}

/// 按顺序排列的全部层级
pub const BLOOM_LEVELS: [BloomLevel; 6] = [
    BloomLevel::Remember,
    BloomLevel::Understand,
    BloomLevel::Apply,
    BloomLevel::Analyze,
    BloomLevel::Evaluate,
    BloomLevel::Create,
];

static LEVELS_BY_CODE: phf::Map<&'static str, BloomLevel> = phf_map! {
    "L1" => BloomLevel::Remember,
    "L2" => BloomLevel::Understand,
    "L3" => BloomLevel::Apply,
    "L4" => BloomLevel::Analyze,
    "L5" => BloomLevel::Evaluate,
    "L6" => BloomLevel::Create,
};

impl BloomLevel {
    /// 层级在目录中的位置（从0开始）
    pub fn index(self) -> usize {
        self as usize
    }

    /// 层级代码（L1 ~ L6）
    pub fn code(self) -> &'static str {
        match self {
            BloomLevel::Remember => "L1",
            BloomLevel::Understand => "L2",
            BloomLevel::Apply => "L3",
            BloomLevel::Analyze => "L4",
            BloomLevel::Evaluate => "L5",
            BloomLevel::Create => "L6",
        }
    }

    /// 层级名称
    pub fn label(self) -> &'static str {
        match self {
            BloomLevel::Remember => "Remember",
            BloomLevel::Understand => "Understand",
            BloomLevel::Apply => "Apply",
            BloomLevel::Analyze => "Analyze",
            BloomLevel::Evaluate => "Evaluate",
            BloomLevel::Create => "Create",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BloomLevel::Remember => "Recall basic facts, terms, concepts",
            BloomLevel::Understand => "Explain ideas, interpret information",
            BloomLevel::Apply => "Use information in new situations",
            BloomLevel::Analyze => "Draw connections, distinguish components",
            BloomLevel::Evaluate => "Justify, critique, make judgments",
            BloomLevel::Create => "Generate new ideas, design solutions",
        }
    }

    /// 相对权重，严格递增
    pub fn weight(self) -> f64 {
        match self {
            BloomLevel::Remember => 0.1,
            BloomLevel::Understand => 0.2,
            BloomLevel::Apply => 0.3,
            BloomLevel::Analyze => 0.4,
            BloomLevel::Evaluate => 0.5,
            BloomLevel::Create => 0.6,
        }
    }

    /// 按位置查找层级
    pub fn from_index(index: usize) -> Option<Self> {
        BLOOM_LEVELS.get(index).copied()
    }

    /// 按代码查找层级（如 "L3"）
    pub fn from_code(code: &str) -> Option<Self> {
        LEVELS_BY_CODE.get(code).copied()
    }
}

impl std::fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code(), self.label())
    }
}

/// 序列化为层级代码
impl Serialize for BloomLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_weights() {
        let weights: Vec<f64> = BLOOM_LEVELS.iter().map(|l| l.weight()).collect();
        assert_eq!(weights, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);

        for pair in BLOOM_LEVELS.windows(2) {
            assert!(pair[0].weight() < pair[1].weight());
        }
    }

    #[test]
    fn test_lookup_by_index_and_code() {
        for (i, level) in BLOOM_LEVELS.iter().enumerate() {
            assert_eq!(level.index(), i);
            assert_eq!(BloomLevel::from_index(i), Some(*level));
            assert_eq!(BloomLevel::from_code(level.code()), Some(*level));
        }

        assert_eq!(BloomLevel::from_index(6), None);
        assert_eq!(BloomLevel::from_code("L7"), None);
        assert_eq!(BloomLevel::from_code("Remember"), None);
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&BloomLevel::Analyze).unwrap();
        assert_eq!(json, "\"L4\"");
        assert_eq!(BloomLevel::Create.to_string(), "L6 (Create)");
    }
}

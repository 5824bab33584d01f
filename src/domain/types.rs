// ==========================================
// 设备维保计划系统 - 领域类型定义
// ==========================================
// 劣化等级 / 资源需求口径 / 未排原因
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 计划期（默认口径：年度）
pub type Period = i32;

/// 预算资源名称
pub const RESOURCE_BUDGET: &str = "Budget";

/// 作业班组资源名称
pub const RESOURCE_CREW: &str = "Crew";

// ==========================================
// 劣化等级 (Condition Grade)
// ==========================================
// 红线: 等级由评分派生,不可独立设置
// 顺序: A(最好) < B < C < D < E(最差)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConditionGrade {
    A, // 健全
    B, // 轻微劣化
    C, // 劣化进行
    D, // 明显劣化
    E, // 危险
}

impl ConditionGrade {
    /// 全部等级（由好到差）
    pub const ALL: [ConditionGrade; 5] = [
        ConditionGrade::A,
        ConditionGrade::B,
        ConditionGrade::C,
        ConditionGrade::D,
        ConditionGrade::E,
    ];

    /// 解析点检记录中的判定字母
    ///
    /// 不区分大小写，忽略首尾空白；无法识别返回 None（由调用方决定默认值）
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Some(ConditionGrade::A),
            "B" => Some(ConditionGrade::B),
            "C" => Some(ConditionGrade::C),
            "D" => Some(ConditionGrade::D),
            "E" => Some(ConditionGrade::E),
            _ => None,
        }
    }

    /// 评分 → 等级（阶梯函数，区间左闭右开）
    ///
    /// s<0.2→A, [0.2,0.4)→B, [0.4,0.6)→C, [0.6,0.8)→D, s≥0.8→E
    ///
    /// 调用方需保证 score 为有限数
    pub fn from_score(score: f64) -> Self {
        if score < 0.2 {
            ConditionGrade::A
        } else if score < 0.4 {
            ConditionGrade::B
        } else if score < 0.6 {
            ConditionGrade::C
        } else if score < 0.8 {
            ConditionGrade::D
        } else {
            ConditionGrade::E
        }
    }

    /// 等级对应的整数优先级（1-5, 5 最高）
    pub fn priority(self) -> u8 {
        match self {
            ConditionGrade::A => 1,
            ConditionGrade::B => 2,
            ConditionGrade::C => 3,
            ConditionGrade::D => 4,
            ConditionGrade::E => 5,
        }
    }
}

impl fmt::Display for ConditionGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionGrade::A => write!(f, "A"),
            ConditionGrade::B => write!(f, "B"),
            ConditionGrade::C => write!(f, "C"),
            ConditionGrade::D => write!(f, "D"),
            ConditionGrade::E => write!(f, "E"),
        }
    }
}

// ==========================================
// 资源需求口径 (Resource Demand)
// ==========================================
// Cost: 按任务费用占用（预算）
// Count: 每个任务占用 1 个单位（班组件数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceDemand {
    Cost,
    Count,
}

impl fmt::Display for ResourceDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceDemand::Cost => write!(f, "COST"),
            ResourceDemand::Count => write!(f, "COUNT"),
        }
    }
}

// ==========================================
// 未排原因 (Unplaced Reason)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnplacedReason {
    WindowOutsideHorizon, // 作业窗口与计划期无交集
    NoCapacityInWindow,   // 窗口内各期资源均不足
}

impl fmt::Display for UnplacedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnplacedReason::WindowOutsideHorizon => write!(f, "WINDOW_OUTSIDE_HORIZON"),
            UnplacedReason::NoCapacityInWindow => write!(f, "NO_CAPACITY_IN_WINDOW"),
        }
    }
}

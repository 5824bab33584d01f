// ==========================================
// 设备维保计划系统 - 劣化等级判定
// ==========================================
// 红线: 等级是评分的阶梯函数,区间左闭右开,边界无歧义
// 输入: 劣化评分
// 输出: (等级, 优先级)
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};
use crate::domain::types::ConditionGrade;

/// 判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub grade: ConditionGrade,
    pub priority: u8,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityClassifier;

impl PriorityClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 评分 → (等级, 优先级)
    ///
    /// 非有限数评分视为非法输入
    pub fn classify(&self, score: f64) -> ValidationResult<Classification> {
        if !score.is_finite() {
            return Err(ValidationError::NonFiniteScore(score));
        }
        let grade = ConditionGrade::from_score(score);
        Ok(Classification {
            grade,
            priority: grade.priority(),
        })
    }
}

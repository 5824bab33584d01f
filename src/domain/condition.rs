// ==========================================
// 设备维保计划系统 - 劣化状态领域模型
// ==========================================
// 红线: grade 由 score 派生,只能通过工厂函数创建
// 生命周期: 每轮评分每台设备创建一次,之后不可变
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};
use crate::domain::types::ConditionGrade;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionState {
    asset_id: String,
    score: f64,
    grade: ConditionGrade,
    assessment_date: NaiveDate,
}

impl ConditionState {
    /// 工厂函数：校验评分并派生等级
    ///
    /// # 校验
    /// - asset_id 非空
    /// - score 为有限数且位于 [0, 1]
    pub fn new(
        asset_id: impl Into<String>,
        score: f64,
        assessment_date: NaiveDate,
    ) -> ValidationResult<Self> {
        let asset_id = asset_id.into();
        if asset_id.trim().is_empty() {
            return Err(ValidationError::EmptyId {
                entity: "condition_state",
            });
        }
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(ValidationError::InvalidScore {
                asset_id,
                value: score,
            });
        }

        Ok(Self {
            asset_id,
            score,
            grade: ConditionGrade::from_score(score),
            assessment_date,
        })
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn grade(&self) -> ConditionGrade {
        self.grade
    }

    pub fn assessment_date(&self) -> NaiveDate {
        self.assessment_date
    }
}

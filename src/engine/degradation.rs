// ==========================================
// 设备维保计划系统 - 劣化评分模型
// ==========================================
// age_factor        = min(age / 60, 1.0)
// inspection_factor = A 0.1 / B 0.3 / C 0.5 / D 0.7 / E 0.9 (缺失或无法识别按 B)
// score             = clamp(0.6·age_factor + 0.4·inspection_factor, 0, 1)
// ==========================================
// 纯函数: 单次调用与批量调用结果一致
// ==========================================

use crate::config::DegradationParams;
use crate::domain::asset::{Asset, InspectionRecord};
use crate::domain::types::ConditionGrade;

/// 点检缺失/无法识别时的默认等级
pub const DEFAULT_INSPECTION_GRADE: ConditionGrade = ConditionGrade::B;

#[derive(Debug, Clone, Copy, Default)]
pub struct DegradationModel {
    params: DegradationParams,
}

impl DegradationModel {
    pub fn new(params: DegradationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DegradationParams {
        &self.params
    }

    /// 劣化评分（[0, 1]）
    pub fn score(&self, asset: &Asset, inspection: Option<&InspectionRecord>) -> f64 {
        let grade = inspection.and_then(InspectionRecord::parsed_grade);
        self.score_from_parts(asset.install_year(), grade)
    }

    /// 由设置年份与点检等级计算评分
    pub fn score_from_parts(&self, install_year: i32, grade: Option<ConditionGrade>) -> f64 {
        let raw = self.params.age_weight * self.age_factor(install_year)
            + self.params.inspection_weight * Self::inspection_factor(grade);
        raw.clamp(0.0, 1.0)
    }

    /// 年数因子（上限 1.0）
    pub fn age_factor(&self, install_year: i32) -> f64 {
        let age = f64::from(self.params.reference_year) - f64::from(install_year);
        (age / self.params.full_degradation_years).min(1.0)
    }

    /// 点检因子
    pub fn inspection_factor(grade: Option<ConditionGrade>) -> f64 {
        match grade.unwrap_or(DEFAULT_INSPECTION_GRADE) {
            ConditionGrade::A => 0.1,
            ConditionGrade::B => 0.3,
            ConditionGrade::C => 0.5,
            ConditionGrade::D => 0.7,
            ConditionGrade::E => 0.9,
        }
    }
}

// ==========================================
// 设备维保计划系统 - 设备与点检领域模型
// ==========================================
// 用途: 导入层写入,引擎层只读
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};
use crate::domain::types::ConditionGrade;
use serde::Serialize;

/// 修缮费用默认值（元）
pub const DEFAULT_REPAIR_COST: f64 = 150_000.0;

// ==========================================
// Asset - 设备主数据
// ==========================================
// 红线: 构造后不可变
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    asset_id: String,     // 设备ID
    site_name: String,    // 设置场所（公园名等）
    category: String,     // 设备种类
    install_year: i32,    // 设置年份
    repair_cost: f64,     // 修缮费用
}

impl Asset {
    /// 构造设备主数据
    ///
    /// # 校验
    /// - asset_id 非空
    /// - repair_cost 为有限非负数
    pub fn new(
        asset_id: impl Into<String>,
        site_name: impl Into<String>,
        category: impl Into<String>,
        install_year: i32,
        repair_cost: f64,
    ) -> ValidationResult<Self> {
        let asset_id = asset_id.into();
        if asset_id.trim().is_empty() {
            return Err(ValidationError::EmptyId { entity: "asset" });
        }
        if !repair_cost.is_finite() || repair_cost < 0.0 {
            return Err(ValidationError::InvalidRepairCost {
                asset_id,
                value: repair_cost,
            });
        }

        Ok(Self {
            asset_id,
            site_name: site_name.into(),
            category: category.into(),
            install_year,
            repair_cost,
        })
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn install_year(&self) -> i32 {
        self.install_year
    }

    pub fn repair_cost(&self) -> f64 {
        self.repair_cost
    }

    /// 展示用标签: "场所 - 种类"
    pub fn label(&self) -> String {
        format!("{} - {}", self.site_name, self.category)
    }
}

// ==========================================
// InspectionRecord - 点检记录
// ==========================================
// 判定字母保留原文,缺失/无法识别时由劣化模型回落到默认等级
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InspectionRecord {
    pub asset_id: String,
    pub grade: Option<String>,
    pub inspection_date: Option<String>,
}

impl InspectionRecord {
    pub fn new(asset_id: impl Into<String>, grade: Option<&str>) -> Self {
        Self {
            asset_id: asset_id.into(),
            grade: grade.map(|g| g.to_string()),
            inspection_date: None,
        }
    }

    /// 解析后的判定等级（无法识别返回 None）
    pub fn parsed_grade(&self) -> Option<ConditionGrade> {
        self.grade.as_deref().and_then(ConditionGrade::parse)
    }
}

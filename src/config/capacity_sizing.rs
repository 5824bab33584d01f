// ==========================================
// 设备维保计划系统 - 资源上限推算策略
// ==========================================
// 未显式配置上限时,按设备台数推算每期预算与班组件数
// 预算 = max(最低预算, 台数 × 单台预算)
// 班组 = max(最低件数, 台数 / 每件覆盖台数)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::capacity::{PlanningHorizon, ResourceCapacity};
use crate::domain::error::ValidationResult;
use crate::domain::types::{ResourceDemand, RESOURCE_BUDGET, RESOURCE_CREW};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacitySizing {
    pub min_budget_per_period: f64,
    pub budget_per_asset: f64,
    pub min_crew_per_period: u32,
    pub assets_per_crew_slot: usize,
}

impl Default for CapacitySizing {
    fn default() -> Self {
        Self {
            min_budget_per_period: 2_000_000.0,
            budget_per_asset: 40_000.0,
            min_crew_per_period: 5,
            assets_per_crew_slot: 10,
        }
    }
}

impl CapacitySizing {
    pub fn validate(&self) -> ConfigResult<()> {
        for (key, v) in [
            ("capacity_sizing.min_budget_per_period", self.min_budget_per_period),
            ("capacity_sizing.budget_per_asset", self.budget_per_asset),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: v.to_string(),
                    message: "必须为非负数".to_string(),
                });
            }
        }
        if self.assets_per_crew_slot == 0 {
            return Err(ConfigError::InvalidValue {
                key: "capacity_sizing.assets_per_crew_slot".to_string(),
                value: "0".to_string(),
                message: "必须 >= 1".to_string(),
            });
        }
        Ok(())
    }

    /// 每期预算上限
    pub fn budget_per_period(&self, asset_count: usize) -> f64 {
        self.min_budget_per_period
            .max(asset_count as f64 * self.budget_per_asset)
    }

    /// 每期班组件数上限
    pub fn crew_per_period(&self, asset_count: usize) -> f64 {
        let by_assets = asset_count / self.assets_per_crew_slot.max(1);
        (self.min_crew_per_period as usize).max(by_assets) as f64
    }

    /// 推算指定资源；不在推算范围内返回 None
    pub fn size_resource(
        &self,
        name: &str,
        asset_count: usize,
        horizon: &PlanningHorizon,
    ) -> ValidationResult<Option<ResourceCapacity>> {
        let sized = match name {
            RESOURCE_BUDGET => Some(ResourceCapacity::uniform(
                RESOURCE_BUDGET,
                ResourceDemand::Cost,
                horizon,
                self.budget_per_period(asset_count),
            )?),
            RESOURCE_CREW => Some(ResourceCapacity::uniform(
                RESOURCE_CREW,
                ResourceDemand::Count,
                horizon,
                self.crew_per_period(asset_count),
            )?),
            _ => None,
        };
        Ok(sized)
    }
}

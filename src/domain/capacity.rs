// ==========================================
// 设备维保计划系统 - 计划期与资源容量领域模型
// ==========================================
// 红线: 资源上限由配置提供,引擎不自行推算
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};
use crate::domain::types::{Period, ResourceDemand};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// PlanningHorizon - 计划期（闭区间）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningHorizon {
    pub start_period: Period,
    pub end_period: Period,
}

impl PlanningHorizon {
    pub fn new(start_period: Period, end_period: Period) -> ValidationResult<Self> {
        if start_period > end_period {
            return Err(ValidationError::InvalidHorizon {
                start: start_period,
                end: end_period,
            });
        }
        Ok(Self {
            start_period,
            end_period,
        })
    }

    /// 计划期内全部期次（升序）
    pub fn periods(&self) -> impl Iterator<Item = Period> {
        self.start_period..=self.end_period
    }

    pub fn contains(&self, period: Period) -> bool {
        period >= self.start_period && period <= self.end_period
    }

    /// 期次数（构造时保证 start <= end, 至少为 1）
    pub fn period_count(&self) -> u64 {
        (i64::from(self.end_period) - i64::from(self.start_period) + 1).max(0) as u64
    }
}

// ==========================================
// ResourceCapacity - 命名资源的分期上限
// ==========================================
// 未出现在映射中的期次,上限视为 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCapacity {
    pub name: String,
    pub demand: ResourceDemand,
    pub capacity_per_period: BTreeMap<Period, f64>,
}

impl ResourceCapacity {
    /// 构造资源上限（校验每期上限为有限非负数）
    pub fn new(
        name: impl Into<String>,
        demand: ResourceDemand,
        capacity_per_period: BTreeMap<Period, f64>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyId { entity: "resource" });
        }
        for (&period, &value) in &capacity_per_period {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidCapacity {
                    resource: name,
                    period,
                    value,
                });
            }
        }
        Ok(Self {
            name,
            demand,
            capacity_per_period,
        })
    }

    /// 计划期内每期相同上限
    pub fn uniform(
        name: impl Into<String>,
        demand: ResourceDemand,
        horizon: &PlanningHorizon,
        ceiling: f64,
    ) -> ValidationResult<Self> {
        let map = horizon.periods().map(|p| (p, ceiling)).collect();
        Self::new(name, demand, map)
    }

    pub fn ceiling(&self, period: Period) -> f64 {
        self.capacity_per_period.get(&period).copied().unwrap_or(0.0)
    }
}

// ==========================================
// PeriodUsage - 单期单资源占用
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodUsage {
    pub used: f64,
    pub ceiling: f64,
}

// ==========================================
// Trait: CapacityConstraint
// ==========================================
// 用途: 排程器约束检查接口
pub trait CapacityConstraint {
    /// 检查追加 delta 后是否仍不超上限
    fn can_add(&self, delta: f64) -> bool;

    /// 检查是否超限
    fn is_overflow(&self) -> bool;

    /// 剩余容量（上限 - 已用）
    fn remaining(&self) -> f64;

    /// 使用率（上限为 0 时返回 0）
    fn utilization(&self) -> f64;
}

impl CapacityConstraint for PeriodUsage {
    fn can_add(&self, delta: f64) -> bool {
        self.used + delta <= self.ceiling
    }

    fn is_overflow(&self) -> bool {
        self.used > self.ceiling
    }

    fn remaining(&self) -> f64 {
        self.ceiling - self.used
    }

    fn utilization(&self) -> f64 {
        if self.ceiling <= 0.0 {
            return 0.0;
        }
        self.used / self.ceiling
    }
}

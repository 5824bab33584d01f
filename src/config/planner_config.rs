// ==========================================
// 设备维保计划系统 - 计划配置
// ==========================================
// 职责: 配置加载、环境变量覆写、校验
// 来源优先级: 默认值 < JSON 配置文件 < 环境变量
// ==========================================

use crate::config::capacity_sizing::CapacitySizing;
use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::asset::DEFAULT_REPAIR_COST;
use crate::domain::capacity::{PlanningHorizon, ResourceCapacity};
use crate::domain::types::{RESOURCE_BUDGET, RESOURCE_CREW};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 默认配置文件相对路径（位于系统配置目录下）
pub const DEFAULT_CONFIG_RELATIVE_PATH: &str = "maint-planner/config.json";

/// 计划期最大期次数（台账按期次逐资源预分配）
pub const MAX_HORIZON_PERIODS: u64 = 1000;

// ==========================================
// 劣化模型参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DegradationParams {
    pub reference_year: i32,         // 评价基准年
    pub full_degradation_years: f64, // 达到完全劣化的年数
    pub age_weight: f64,             // 年数权重
    pub inspection_weight: f64,      // 点检权重
}

impl Default for DegradationParams {
    fn default() -> Self {
        Self {
            reference_year: 2025,
            full_degradation_years: 60.0,
            age_weight: 0.6,
            inspection_weight: 0.4,
        }
    }
}

// ==========================================
// 任务派生参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskGenerationParams {
    pub duration: u32,                  // 作业期数
    pub service_grace_years: i32,       // 设置后免修年数
    pub penalty_coefficient_scale: f64, // 罚金系数 = score × scale
    pub default_repair_cost: f64,       // 导入缺省修缮费用
}

impl Default for TaskGenerationParams {
    fn default() -> Self {
        Self {
            duration: 1,
            service_grace_years: 5,
            penalty_coefficient_scale: 1000.0,
            default_repair_cost: DEFAULT_REPAIR_COST,
        }
    }
}

// ==========================================
// PlannerConfig - 计划配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub horizon: PlanningHorizon,
    pub degradation: DegradationParams,
    pub task: TaskGenerationParams,
    /// 显式分期上限；未列出的参与资源按 capacity_sizing 推算
    pub resources: Vec<ResourceCapacity>,
    pub capacity_sizing: CapacitySizing,
    pub participating_resources: Vec<String>,
    /// 评分并行度；None 表示按硬件并发数
    pub scoring_workers: Option<usize>,
    pub max_assets: usize,
    /// 评价日期；None 表示基准年 1 月 1 日
    pub assessment_date: Option<NaiveDate>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            horizon: PlanningHorizon {
                start_period: 2025,
                end_period: 2040,
            },
            degradation: DegradationParams::default(),
            task: TaskGenerationParams::default(),
            resources: Vec::new(),
            capacity_sizing: CapacitySizing::default(),
            participating_resources: vec![RESOURCE_BUDGET.to_string(), RESOURCE_CREW.to_string()],
            scoring_workers: None,
            max_assets: 100,
            assessment_date: None,
        }
    }
}

impl PlannerConfig {
    // ==========================================
    // 加载
    // ==========================================

    /// 从 JSON 文件加载（缺省字段取默认值）
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: PlannerConfig = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "配置文件已加载");
        Ok(config)
    }

    /// 默认配置文件路径（系统配置目录）
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_RELATIVE_PATH))
    }

    /// 加载有效配置
    ///
    /// 1) 显式路径存在则读取，读取失败即报错
    /// 2) 否则尝试默认路径，不存在则使用默认值
    /// 3) 应用环境变量覆写
    /// 4) 校验
    pub fn load(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env_overrides_from(|key| std::env::var(key).ok())?;
        config.validate()?;

        info!(
            horizon_start = config.horizon.start_period,
            horizon_end = config.horizon.end_period,
            reference_year = config.degradation.reference_year,
            max_assets = config.max_assets,
            "计划配置已生效"
        );

        Ok(config)
    }

    /// 应用环境变量覆写（lookup 便于测试注入）
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        use crate::config::config_keys::*;

        if let Some(v) = parse_env::<i32, _>(&lookup, HORIZON_START)? {
            self.horizon.start_period = v;
        }
        if let Some(v) = parse_env::<i32, _>(&lookup, HORIZON_END)? {
            self.horizon.end_period = v;
        }
        if let Some(v) = parse_env::<i32, _>(&lookup, REFERENCE_YEAR)? {
            self.degradation.reference_year = v;
        }
        if let Some(v) = parse_env::<usize, _>(&lookup, SCORING_WORKERS)? {
            self.scoring_workers = Some(v);
        }
        if let Some(v) = parse_env::<usize, _>(&lookup, MAX_ASSETS)? {
            self.max_assets = v;
        }
        Ok(())
    }

    // ==========================================
    // 校验
    // ==========================================

    pub fn validate(&self) -> ConfigResult<()> {
        let horizon = PlanningHorizon::new(self.horizon.start_period, self.horizon.end_period)?;
        if horizon.period_count() > MAX_HORIZON_PERIODS {
            return Err(ConfigError::InvalidValue {
                key: "horizon".to_string(),
                value: format!("{}..={}", horizon.start_period, horizon.end_period),
                message: format!("期次数不得超过 {}", MAX_HORIZON_PERIODS),
            });
        }

        let d = &self.degradation;
        if !(d.full_degradation_years.is_finite() && d.full_degradation_years > 0.0) {
            return Err(invalid("degradation.full_degradation_years", "必须为正数"));
        }
        for (key, w) in [
            ("degradation.age_weight", d.age_weight),
            ("degradation.inspection_weight", d.inspection_weight),
        ] {
            if !(w.is_finite() && w >= 0.0) {
                return Err(invalid(key, "必须为非负数"));
            }
        }

        let t = &self.task;
        if t.duration == 0 {
            return Err(invalid("task.duration", "必须 >= 1"));
        }
        if !(t.penalty_coefficient_scale.is_finite() && t.penalty_coefficient_scale >= 0.0) {
            return Err(invalid("task.penalty_coefficient_scale", "必须为非负数"));
        }
        if !(t.default_repair_cost.is_finite() && t.default_repair_cost >= 0.0) {
            return Err(invalid("task.default_repair_cost", "必须为非负数"));
        }

        if self.scoring_workers == Some(0) {
            return Err(invalid("scoring_workers", "必须 >= 1"));
        }
        if self.max_assets == 0 {
            return Err(invalid("max_assets", "必须 >= 1"));
        }

        self.capacity_sizing.validate()?;

        // 显式上限重新走一遍领域校验
        for resource in &self.resources {
            ResourceCapacity::new(
                resource.name.clone(),
                resource.demand,
                resource.capacity_per_period.clone(),
            )?;
        }

        for required in [RESOURCE_BUDGET, RESOURCE_CREW] {
            if !self.participating_resources.iter().any(|n| n == required) {
                return Err(ConfigError::InvalidValue {
                    key: "participating_resources".to_string(),
                    value: required.to_string(),
                    message: "Budget 与 Crew 必须参与".to_string(),
                });
            }
        }
        for name in &self.participating_resources {
            let explicit = self.resources.iter().any(|r| &r.name == name);
            let sizable = name == RESOURCE_BUDGET || name == RESOURCE_CREW;
            if !explicit && !sizable {
                return Err(ConfigError::InvalidValue {
                    key: "participating_resources".to_string(),
                    value: name.clone(),
                    message: "既无显式上限,也不在自动推算范围 (Budget/Crew)".to_string(),
                });
            }
        }

        Ok(())
    }

    /// 解析参与资源的分期上限（显式优先,否则按台数推算）
    ///
    /// 返回顺序与 participating_resources 一致
    pub fn resolve_capacities(&self, asset_count: usize) -> ConfigResult<Vec<ResourceCapacity>> {
        let mut capacities = Vec::with_capacity(self.participating_resources.len());
        for name in &self.participating_resources {
            if let Some(explicit) = self.resources.iter().find(|r| &r.name == name) {
                capacities.push(explicit.clone());
                continue;
            }
            match self
                .capacity_sizing
                .size_resource(name, asset_count, &self.horizon)?
            {
                Some(sized) => {
                    debug!(
                        resource = %name,
                        asset_count,
                        ceiling = sized.ceiling(self.horizon.start_period),
                        "资源上限按台数推算"
                    );
                    capacities.push(sized);
                }
                None => {
                    return Err(ConfigError::InvalidValue {
                        key: "participating_resources".to_string(),
                        value: name.clone(),
                        message: "缺少资源上限".to_string(),
                    })
                }
            }
        }
        Ok(capacities)
    }

    /// 评价日期（未配置时取基准年 1 月 1 日）
    pub fn effective_assessment_date(&self) -> NaiveDate {
        self.assessment_date
            .or_else(|| NaiveDate::from_ymd_opt(self.degradation.reference_year, 1, 1))
            .unwrap_or_default()
    }

    /// 评分并行度（未配置时取硬件并发数）
    pub fn effective_scoring_workers(&self) -> usize {
        self.scoring_workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: String::new(),
        message: message.to_string(),
    }
}

fn parse_env<T, F>(lookup: &F, key: &str) -> ConfigResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw.clone(),
                message: e.to_string(),
            }),
    }
}

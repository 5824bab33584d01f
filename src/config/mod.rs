// ==========================================
// 设备维保计划系统 - 配置层
// ==========================================
// 职责: 计划配置加载/覆写/校验, 资源上限推算策略
// 存储: JSON 配置文件 + 环境变量
// ==========================================

pub mod capacity_sizing;
pub mod config_keys;
pub mod error;
pub mod planner_config;

// 重导出
pub use capacity_sizing::CapacitySizing;
pub use error::{ConfigError, ConfigResult};
pub use planner_config::{DegradationParams, PlannerConfig, TaskGenerationParams, MAX_HORIZON_PERIODS};

// ==========================================
// 设备维保计划系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、构造期校验
// 红线: 不含引擎逻辑,不含文件读写
// ==========================================

pub mod asset;
pub mod capacity;
pub mod condition;
pub mod error;
pub mod schedule;
pub mod task;
pub mod types;

// 重导出核心类型
pub use asset::{Asset, InspectionRecord, DEFAULT_REPAIR_COST};
pub use capacity::{CapacityConstraint, PeriodUsage, PlanningHorizon, ResourceCapacity};
pub use condition::ConditionState;
pub use error::{ValidationError, ValidationResult};
pub use schedule::{
    ResourceUsageSeries, Schedule, ScheduleEntry, ScheduleStatistics, UnplacedTask,
};
pub use task::{MaintenanceTask, TaskDraft};
pub use types::{
    ConditionGrade, Period, ResourceDemand, UnplacedReason, RESOURCE_BUDGET, RESOURCE_CREW,
};

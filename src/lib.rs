// ==========================================
// 设备维保计划系统 - 核心库
// ==========================================
// 技术栈: Rust + tokio + CSV
// 系统定位: 状态监视型维保计划（劣化评分 + 约束贪心排程）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 评分与排程
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 计划配置
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ConditionGrade, Period, ResourceDemand, UnplacedReason};

// 领域实体
pub use domain::{
    Asset, ConditionState, InspectionRecord, MaintenanceTask, PlanningHorizon, ResourceCapacity,
    Schedule, ScheduleEntry, ScheduleStatistics, UnplacedTask,
};

// 引擎
pub use engine::{
    DegradationModel, GreedyScheduler, PenaltyModel, PlanningOrchestrator, PlanningResult,
    PriorityClassifier, ResourceLedger, ScoringCoordinator, TaskGenerator,
};

// 配置
pub use config::PlannerConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "设备维保计划系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

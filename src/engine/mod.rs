// ==========================================
// 设备维保计划系统 - 引擎层
// ==========================================
// 职责: 劣化评分、等级判定、任务派生、资源台账、贪心排程
// 红线: 引擎不读写文件,所有未排任务必须输出原因
// ==========================================

pub mod classifier;
pub mod degradation;
pub mod error;
pub mod gantt;
pub mod greedy_scheduler;
pub mod ledger;
pub mod orchestrator;
pub mod penalty;
pub mod priority;
pub mod scoring;
pub mod task_generator;

// 重导出核心引擎
pub use classifier::{Classification, PriorityClassifier};
pub use degradation::{DegradationModel, DEFAULT_INSPECTION_GRADE};
pub use error::{EngineError, EngineResult};
pub use gantt::{build_gantt_rows, GanttRow};
pub use greedy_scheduler::GreedyScheduler;
pub use ledger::ResourceLedger;
pub use orchestrator::{PlanningOrchestrator, PlanningResult};
pub use penalty::{PenaltyModel, PENALTY_RATE};
pub use priority::TaskPrioritySorter;
pub use scoring::{parallel_map, ScoringCoordinator};
pub use task_generator::TaskGenerator;

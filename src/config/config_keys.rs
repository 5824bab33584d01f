// ==========================================
// 设备维保计划系统 - 环境变量覆写键
// ==========================================

// 计划期
pub const HORIZON_START: &str = "MAINT_PLANNER_HORIZON_START";
pub const HORIZON_END: &str = "MAINT_PLANNER_HORIZON_END";

// 劣化评分
pub const REFERENCE_YEAR: &str = "MAINT_PLANNER_REFERENCE_YEAR";
pub const SCORING_WORKERS: &str = "MAINT_PLANNER_SCORING_WORKERS";

// 导入
pub const MAX_ASSETS: &str = "MAINT_PLANNER_MAX_ASSETS";

// ==========================================
// 设备维保计划系统 - 领域校验错误
// ==========================================
// 工具: thiserror 派生宏
// 红线: 非法输入一律拒绝,不做静默修正
// ==========================================

use thiserror::Error;

/// 领域对象构造期校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ===== 标识 =====
    #[error("标识为空: {entity}")]
    EmptyId { entity: &'static str },

    #[error("设备ID重复: {0}")]
    DuplicateAsset(String),

    // ===== 设备 =====
    #[error("修缮费用非法 (asset_id={asset_id}): {value}")]
    InvalidRepairCost { asset_id: String, value: f64 },

    // ===== 劣化状态 =====
    #[error("劣化评分非法 (asset_id={asset_id}): {value}，应在 [0, 1] 内")]
    InvalidScore { asset_id: String, value: f64 },

    #[error("劣化评分不是有限数: {0}")]
    NonFiniteScore(f64),

    // ===== 维保任务 =====
    #[error("任务费用非法 (task_id={task_id}): {value}")]
    InvalidCost { task_id: String, value: f64 },

    #[error("任务窗口非法 (task_id={task_id}): earliest_start={earliest_start} > latest_end={latest_end}")]
    InvalidWindow {
        task_id: String,
        earliest_start: i32,
        latest_end: i32,
    },

    #[error("任务优先级非法 (task_id={task_id}): {value}，应在 [1, 5] 内")]
    InvalidPriority { task_id: String, value: u8 },

    #[error("任务工期非法 (task_id={task_id}): {value}")]
    InvalidDuration { task_id: String, value: u32 },

    #[error("延迟罚金系数非法 (task_id={task_id}): {value}")]
    InvalidPenaltyCoefficient { task_id: String, value: f64 },

    // ===== 计划期与资源 =====
    #[error("计划期非法: start={start} > end={end}")]
    InvalidHorizon { start: i32, end: i32 },

    #[error("资源上限非法 (resource={resource}, period={period}): {value}")]
    InvalidCapacity {
        resource: String,
        period: i32,
        value: f64,
    },
}

/// Result 类型别名
pub type ValidationResult<T> = Result<T, ValidationError>;

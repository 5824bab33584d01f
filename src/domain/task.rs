// ==========================================
// 设备维保计划系统 - 维保任务领域模型
// ==========================================
// 每台设备每个计划周期一个任务,由劣化状态派生
// 红线: 非法窗口/费用/优先级在构造期拒绝,不做修正
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};
use crate::domain::types::Period;
use serde::Serialize;

/// 任务构造参数（未校验）
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub task_id: String,
    pub asset_id: String,
    pub duration: u32,             // 作业期数
    pub earliest_start: Period,    // 最早开工期
    pub latest_end: Period,        // 最迟完工期
    pub cost: f64,                 // 修缮费用
    pub priority: u8,              // 优先级 1-5, 5 最高
    pub penalty_coefficient: f64,  // 延迟罚金系数
}

// ==========================================
// MaintenanceTask - 维保任务（已校验）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceTask {
    task_id: String,
    asset_id: String,
    duration: u32,
    earliest_start: Period,
    latest_end: Period,
    cost: f64,
    priority: u8,
    penalty_coefficient: f64,
}

impl MaintenanceTask {
    /// 校验并构造任务
    pub fn new(draft: TaskDraft) -> ValidationResult<Self> {
        let TaskDraft {
            task_id,
            asset_id,
            duration,
            earliest_start,
            latest_end,
            cost,
            priority,
            penalty_coefficient,
        } = draft;

        if task_id.trim().is_empty() {
            return Err(ValidationError::EmptyId { entity: "task" });
        }
        if asset_id.trim().is_empty() {
            return Err(ValidationError::EmptyId {
                entity: "task.asset_id",
            });
        }
        if duration == 0 {
            return Err(ValidationError::InvalidDuration {
                task_id,
                value: duration,
            });
        }
        if earliest_start > latest_end {
            return Err(ValidationError::InvalidWindow {
                task_id,
                earliest_start,
                latest_end,
            });
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(ValidationError::InvalidCost {
                task_id,
                value: cost,
            });
        }
        if !(1..=5).contains(&priority) {
            return Err(ValidationError::InvalidPriority {
                task_id,
                value: priority,
            });
        }
        if !penalty_coefficient.is_finite() || penalty_coefficient < 0.0 {
            return Err(ValidationError::InvalidPenaltyCoefficient {
                task_id,
                value: penalty_coefficient,
            });
        }

        Ok(Self {
            task_id,
            asset_id,
            duration,
            earliest_start,
            latest_end,
            cost,
            priority,
            penalty_coefficient,
        })
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn earliest_start(&self) -> Period {
        self.earliest_start
    }

    pub fn latest_end(&self) -> Period {
        self.latest_end
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn penalty_coefficient(&self) -> f64 {
        self.penalty_coefficient
    }
}

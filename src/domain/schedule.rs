// ==========================================
// 设备维保计划系统 - 排程结果领域模型
// ==========================================
// 红线: 只是结果快照,返回后引擎不再读写
// 未排任务不产生 ScheduleEntry
// ==========================================

use crate::domain::capacity::PeriodUsage;
use crate::domain::types::{Period, UnplacedReason};
use serde::Serialize;
use std::collections::BTreeMap;

// ==========================================
// ScheduleEntry - 排程明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub task_id: String,
    pub asset_id: String,
    pub scheduled_period: Period,  // 落位期次
    pub cost: f64,
    pub priority: u8,
    pub delay_periods: u32,        // 落位期 - 最早开工期
    pub penalty: f64,              // 延迟罚金
}

// ==========================================
// UnplacedTask - 未排任务
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnplacedTask {
    pub task_id: String,
    pub asset_id: String,
    pub priority: u8,
    pub reason: UnplacedReason,
}

// ==========================================
// ScheduleStatistics - 汇总统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleStatistics {
    pub scheduled_tasks: usize,
    pub total_tasks: usize,
    pub scheduling_ratio: f64,  // scheduled / total, 无任务时为 0
    pub total_cost: f64,
    pub total_penalty: f64,
}

/// 资源 → 期次 → 占用
pub type ResourceUsageSeries = BTreeMap<String, BTreeMap<Period, PeriodUsage>>;

// ==========================================
// Schedule - 排程结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,     // 按落位顺序
    pub unplaced: Vec<UnplacedTask>,     // 按处理顺序
    pub resource_usage: ResourceUsageSeries,
    pub statistics: ScheduleStatistics,
}

impl Schedule {
    /// 按任务ID查找排程明细
    pub fn entry(&self, task_id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.task_id == task_id)
    }

    pub fn is_scheduled(&self, task_id: &str) -> bool {
        self.entry(task_id).is_some()
    }

    /// 某资源的分期已用量
    pub fn usage_of(&self, resource: &str) -> BTreeMap<Period, f64> {
        self.resource_usage
            .get(resource)
            .map(|series| series.iter().map(|(p, u)| (*p, u.used)).collect())
            .unwrap_or_default()
    }
}

// ==========================================
// 设备维保计划系统 - 贪心排程引擎
// ==========================================
// 红线: 资源上限优先于任务优先级
// 输入: 维保任务列表 + 计划期 + 资源台账
// 输出: Schedule (排程明细 + 分期占用 + 汇总统计)
// ==========================================
// 流程:
// 1) 排序: 按 TaskPrioritySorter 建立全序
// 2) 落位: 依序扫描 [max(最早开工, 计划期起), min(最迟完工, 计划期止)],
//    取第一个 try_commit 成功的期次
// 3) 汇总: 费用/罚金/落位数/落位率
// ==========================================
// 已知局限:
// - 单遍列表排程,非最优解
// - 未落位任务本轮不再重试
// - 不会挤出已落位任务为后到的高优先级任务腾位,
//   窗口很窄的任务在极端输入下可能排不进
// ==========================================

use crate::domain::capacity::{PlanningHorizon, ResourceCapacity};
use crate::domain::schedule::{Schedule, ScheduleEntry, ScheduleStatistics, UnplacedTask};
use crate::domain::task::MaintenanceTask;
use crate::domain::types::{Period, UnplacedReason};
use crate::engine::ledger::ResourceLedger;
use crate::engine::penalty::PenaltyModel;
use crate::engine::priority::TaskPrioritySorter;
use tracing::{debug, info, instrument};

/// 每个任务占用的班组件数
pub const CREW_UNITS_PER_TASK: f64 = 1.0;

// ==========================================
// GreedyScheduler - 贪心排程引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyScheduler {
    sorter: TaskPrioritySorter,
    penalty: PenaltyModel,
}

/// 单任务落位结果
enum Placement {
    Placed(Period),
    Unplaced(UnplacedReason),
}

impl GreedyScheduler {
    pub fn new() -> Self {
        Self {
            sorter: TaskPrioritySorter::new(),
            penalty: PenaltyModel::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 以资源上限新建台账并排程
    pub fn schedule_with_capacities(
        &self,
        tasks: &[MaintenanceTask],
        horizon: &PlanningHorizon,
        capacities: &[ResourceCapacity],
    ) -> Schedule {
        let mut ledger = ResourceLedger::new(capacities, horizon);
        self.schedule(tasks, horizon, &mut ledger)
    }

    /// 排程（台账会被修改）
    ///
    /// 任务无法落位不是错误: 不生成明细,记入 unplaced 与落位率
    #[instrument(skip(self, tasks, ledger), fields(
        tasks_count = tasks.len(),
        horizon_start = horizon.start_period,
        horizon_end = horizon.end_period
    ))]
    pub fn schedule(
        &self,
        tasks: &[MaintenanceTask],
        horizon: &PlanningHorizon,
        ledger: &mut ResourceLedger,
    ) -> Schedule {
        // 1. 排序
        let order = self.sorter.order(tasks);

        // 2. 依序落位
        let mut entries = Vec::new();
        let mut unplaced = Vec::new();

        for (rank, &index) in order.iter().enumerate() {
            let task = &tasks[index];
            match self.place(task, horizon, ledger) {
                Placement::Placed(period) => {
                    entries.push(self.create_entry(task, period));
                }
                Placement::Unplaced(reason) => {
                    debug!(
                        task_id = task.task_id(),
                        reason = %reason,
                        sort_reason = %self.sorter.sort_reason(task, rank),
                        "任务无法落位"
                    );
                    unplaced.push(UnplacedTask {
                        task_id: task.task_id().to_string(),
                        asset_id: task.asset_id().to_string(),
                        priority: task.priority(),
                        reason,
                    });
                }
            }
        }

        // 3. 汇总
        let statistics = Self::summarize(&entries, tasks.len());

        info!(
            scheduled = statistics.scheduled_tasks,
            total = statistics.total_tasks,
            ratio = statistics.scheduling_ratio,
            total_cost = statistics.total_cost,
            total_penalty = statistics.total_penalty,
            "排程完成"
        );

        Schedule {
            entries,
            unplaced,
            resource_usage: ledger.usage_series(),
            statistics,
        }
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 在窗口与计划期交集内寻找最早可行期次
    fn place(
        &self,
        task: &MaintenanceTask,
        horizon: &PlanningHorizon,
        ledger: &mut ResourceLedger,
    ) -> Placement {
        let first = task.earliest_start().max(horizon.start_period);
        let last = task.latest_end().min(horizon.end_period);
        if first > last {
            return Placement::Unplaced(UnplacedReason::WindowOutsideHorizon);
        }

        for period in first..=last {
            if ledger.try_commit(period, task.cost(), CREW_UNITS_PER_TASK) {
                return Placement::Placed(period);
            }
        }
        Placement::Unplaced(UnplacedReason::NoCapacityInWindow)
    }

    fn create_entry(&self, task: &MaintenanceTask, period: Period) -> ScheduleEntry {
        // 延迟期数超出 u32 时取上限
        let delay = (i64::from(period) - i64::from(task.earliest_start())).max(0);
        let delay_periods = u32::try_from(delay).unwrap_or(u32::MAX);
        ScheduleEntry {
            task_id: task.task_id().to_string(),
            asset_id: task.asset_id().to_string(),
            scheduled_period: period,
            cost: task.cost(),
            priority: task.priority(),
            delay_periods,
            penalty: self
                .penalty
                .penalty(task.penalty_coefficient(), delay_periods, task.cost()),
        }
    }

    fn summarize(entries: &[ScheduleEntry], total_tasks: usize) -> ScheduleStatistics {
        let scheduled_tasks = entries.len();
        ScheduleStatistics {
            scheduled_tasks,
            total_tasks,
            scheduling_ratio: if total_tasks == 0 {
                0.0
            } else {
                scheduled_tasks as f64 / total_tasks as f64
            },
            total_cost: entries.iter().map(|e| e.cost).sum(),
            total_penalty: entries.iter().map(|e| e.penalty).sum(),
        }
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::TaskDraft;
    use crate::domain::types::ResourceDemand;
    use std::collections::BTreeMap;

    fn task(id: &str, priority: u8, earliest: i32, latest: i32, cost: f64) -> MaintenanceTask {
        MaintenanceTask::new(TaskDraft {
            task_id: id.to_string(),
            asset_id: format!("asset_{}", id),
            duration: 1,
            earliest_start: earliest,
            latest_end: latest,
            cost,
            priority,
            penalty_coefficient: 100.0,
        })
        .unwrap()
    }

    fn capacities(horizon: &PlanningHorizon, budget: f64, crew: f64) -> Vec<ResourceCapacity> {
        vec![
            ResourceCapacity::uniform("Budget", ResourceDemand::Cost, horizon, budget).unwrap(),
            ResourceCapacity::uniform("Crew", ResourceDemand::Count, horizon, crew).unwrap(),
        ]
    }

    #[test]
    fn test_empty_task_list_has_zero_ratio() {
        let horizon = PlanningHorizon::new(2025, 2025).unwrap();
        let schedule =
            GreedyScheduler::new().schedule_with_capacities(&[], &horizon, &capacities(&horizon, 1.0, 1.0));
        assert!(schedule.entries.is_empty());
        assert_eq!(schedule.statistics.scheduling_ratio, 0.0);
        assert_eq!(schedule.statistics.total_tasks, 0);
    }

    #[test]
    fn test_higher_priority_wins_single_period() {
        let horizon = PlanningHorizon::new(2025, 2025).unwrap();
        let tasks = vec![task("low", 3, 2025, 2025, 100.0), task("high", 5, 2025, 2025, 100.0)];
        let schedule = GreedyScheduler::new().schedule_with_capacities(
            &tasks,
            &horizon,
            &capacities(&horizon, 150.0, 10.0),
        );

        assert_eq!(schedule.entries.len(), 1);
        assert_eq!(schedule.entries[0].task_id, "high");
        assert!(!schedule.is_scheduled("low"));
        assert_eq!(schedule.statistics.scheduling_ratio, 0.5);
        assert_eq!(schedule.unplaced[0].reason, UnplacedReason::NoCapacityInWindow);
    }

    #[test]
    fn test_task_slides_to_next_period_with_penalty() {
        let horizon = PlanningHorizon::new(2025, 2027).unwrap();
        let tasks = vec![task("A", 5, 2025, 2027, 100.0), task("B", 4, 2025, 2027, 100.0)];
        let schedule = GreedyScheduler::new().schedule_with_capacities(
            &tasks,
            &horizon,
            &capacities(&horizon, 100.0, 10.0),
        );

        let b = schedule.entry("B").unwrap();
        assert_eq!(b.scheduled_period, 2026);
        assert_eq!(b.delay_periods, 1);
        // 100 × 1 × 100 × 0.001
        assert!((b.penalty - 10.0).abs() < 1e-9);
        assert_eq!(schedule.entry("A").unwrap().penalty, 0.0);
        assert!((schedule.statistics.total_penalty - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_outside_horizon_is_unplaced() {
        let horizon = PlanningHorizon::new(2020, 2024).unwrap();
        let tasks = vec![task("late", 5, 2025, 2025, 10.0)];
        let schedule = GreedyScheduler::new().schedule_with_capacities(
            &tasks,
            &horizon,
            &capacities(&horizon, 1000.0, 10.0),
        );
        assert!(schedule.entries.is_empty());
        assert_eq!(schedule.unplaced.len(), 1);
        assert_eq!(schedule.unplaced[0].reason, UnplacedReason::WindowOutsideHorizon);
        assert_eq!(schedule.statistics.scheduling_ratio, 0.0);
    }

    #[test]
    fn test_crew_limit_binds_before_budget() {
        let horizon = PlanningHorizon::new(2025, 2025).unwrap();
        let tasks: Vec<_> = (0..4).map(|i| task(&format!("T{}", i), 3, 2025, 2025, 1.0)).collect();
        let schedule = GreedyScheduler::new().schedule_with_capacities(
            &tasks,
            &horizon,
            &capacities(&horizon, 1_000_000.0, 2.0),
        );
        assert_eq!(schedule.statistics.scheduled_tasks, 2);
        assert_eq!(schedule.usage_of("Crew")[&2025], 2.0);
        assert_eq!(schedule.usage_of("Budget")[&2025], 2.0);
    }

    #[test]
    fn test_period_before_horizon_start_is_skipped() {
        let horizon = PlanningHorizon::new(2025, 2030).unwrap();
        let tasks = vec![task("early", 2, 2020, 2030, 10.0)];
        let schedule = GreedyScheduler::new().schedule_with_capacities(
            &tasks,
            &horizon,
            &capacities(&horizon, 100.0, 1.0),
        );
        let entry = schedule.entry("early").unwrap();
        assert_eq!(entry.scheduled_period, 2025);
        assert_eq!(entry.delay_periods, 5);
    }

    #[test]
    fn test_missing_ceiling_blocks_period() {
        let horizon = PlanningHorizon::new(2025, 2026).unwrap();
        let mut budget = BTreeMap::new();
        budget.insert(2026, 500.0);
        let capacities = vec![
            ResourceCapacity::new("Budget", ResourceDemand::Cost, budget).unwrap(),
            ResourceCapacity::uniform("Crew", ResourceDemand::Count, &horizon, 5.0).unwrap(),
        ];
        let tasks = vec![task("A", 5, 2025, 2026, 100.0)];
        let schedule = GreedyScheduler::new().schedule_with_capacities(&tasks, &horizon, &capacities);
        assert_eq!(schedule.entry("A").unwrap().scheduled_period, 2026);
    }

    #[test]
    fn test_narrow_window_task_can_starve() {
        // 宽窗口任务先占满 2025, 不会为窄窗口任务让位
        let horizon = PlanningHorizon::new(2025, 2026).unwrap();
        let tasks = vec![
            task("wide", 5, 2025, 2026, 100.0),
            task("narrow", 4, 2025, 2025, 100.0),
        ];
        let schedule = GreedyScheduler::new().schedule_with_capacities(
            &tasks,
            &horizon,
            &capacities(&horizon, 100.0, 5.0),
        );
        assert_eq!(schedule.entry("wide").unwrap().scheduled_period, 2025);
        assert!(!schedule.is_scheduled("narrow"));
    }

    #[test]
    fn test_extreme_earliest_start_saturates_delay() {
        let horizon = PlanningHorizon::new(2025, 2025).unwrap();
        let tasks = vec![task("ancient", 5, i32::MIN, 2025, 10.0)];
        let schedule = GreedyScheduler::new().schedule_with_capacities(
            &tasks,
            &horizon,
            &capacities(&horizon, 1_000.0, 5.0),
        );

        let entry = schedule.entry("ancient").unwrap();
        assert_eq!(entry.scheduled_period, 2025);
        assert_eq!(entry.delay_periods, u32::MAX);
        assert!(entry.penalty.is_finite());
        assert!(entry.penalty > 0.0);
        assert_eq!(schedule.statistics.scheduling_ratio, 1.0);
    }
}

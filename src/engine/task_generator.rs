// ==========================================
// 设备维保计划系统 - 维保任务派生
// ==========================================
// 输入: 设备主数据 + 劣化状态 + 计划期
// 输出: 每台设备一个 MaintenanceTask
// ==========================================
// task_id             = "repair_{asset_id}"
// earliest_start      = max(设置年 + 免修年数, 计划期起)
// latest_end          = max(计划期止, earliest_start)
// cost                = 设备修缮费用
// priority            = 等级对应优先级
// penalty_coefficient = score × scale
// ==========================================

use crate::config::TaskGenerationParams;
use crate::domain::asset::Asset;
use crate::domain::capacity::PlanningHorizon;
use crate::domain::condition::ConditionState;
use crate::domain::error::ValidationResult;
use crate::domain::task::{MaintenanceTask, TaskDraft};
use crate::engine::classifier::PriorityClassifier;
use std::collections::HashMap;
use tracing::{debug, warn};

/// 任务ID前缀
pub const TASK_ID_PREFIX: &str = "repair_";

#[derive(Debug, Clone, Copy)]
pub struct TaskGenerator {
    params: TaskGenerationParams,
    classifier: PriorityClassifier,
}

impl TaskGenerator {
    pub fn new(params: TaskGenerationParams) -> Self {
        Self {
            params,
            classifier: PriorityClassifier::new(),
        }
    }

    /// 单台设备派生任务
    ///
    /// 窗口完全落在计划期之后时仍生成任务,由排程器记为未排
    pub fn generate(
        &self,
        asset: &Asset,
        state: &ConditionState,
        horizon: &PlanningHorizon,
    ) -> ValidationResult<MaintenanceTask> {
        let classification = self.classifier.classify(state.score())?;

        let earliest_start = asset
            .install_year()
            .saturating_add(self.params.service_grace_years)
            .max(horizon.start_period);
        let latest_end = horizon.end_period.max(earliest_start);

        MaintenanceTask::new(TaskDraft {
            task_id: format!("{}{}", TASK_ID_PREFIX, asset.asset_id()),
            asset_id: asset.asset_id().to_string(),
            duration: self.params.duration,
            earliest_start,
            latest_end,
            cost: asset.repair_cost(),
            priority: classification.priority,
            penalty_coefficient: state.score() * self.params.penalty_coefficient_scale,
        })
    }

    /// 批量派生（按设备顺序）
    ///
    /// 缺少劣化状态的设备跳过并告警
    pub fn generate_all(
        &self,
        assets: &[Asset],
        states: &[ConditionState],
        horizon: &PlanningHorizon,
    ) -> ValidationResult<Vec<MaintenanceTask>> {
        let by_id: HashMap<&str, &ConditionState> =
            states.iter().map(|s| (s.asset_id(), s)).collect();

        let mut tasks = Vec::with_capacity(assets.len());
        for asset in assets {
            match by_id.get(asset.asset_id()) {
                Some(state) => tasks.push(self.generate(asset, state, horizon)?),
                None => warn!(asset_id = asset.asset_id(), "缺少劣化状态,跳过任务派生"),
            }
        }

        debug!(tasks_count = tasks.len(), "维保任务派生完成");
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn horizon() -> PlanningHorizon {
        PlanningHorizon::new(2025, 2040).unwrap()
    }

    #[test]
    fn test_generate_old_asset() {
        let asset = Asset::new("EQ1", "Park", "Swing", 1970, 200_000.0).unwrap();
        let state = ConditionState::new("EQ1", 0.91, date()).unwrap();
        let task = TaskGenerator::new(TaskGenerationParams::default())
            .generate(&asset, &state, &horizon())
            .unwrap();

        assert_eq!(task.task_id(), "repair_EQ1");
        assert_eq!(task.earliest_start(), 2025);
        assert_eq!(task.latest_end(), 2040);
        assert_eq!(task.cost(), 200_000.0);
        assert_eq!(task.priority(), 5);
        assert!((task.penalty_coefficient() - 910.0).abs() < 1e-9);
        assert_eq!(task.duration(), 1);
    }

    #[test]
    fn test_recent_install_shifts_earliest_start() {
        let asset = Asset::new("EQ2", "Park", "Bench", 2030, 1000.0).unwrap();
        let state = ConditionState::new("EQ2", 0.1, date()).unwrap();
        let task = TaskGenerator::new(TaskGenerationParams::default())
            .generate(&asset, &state, &horizon())
            .unwrap();
        assert_eq!(task.earliest_start(), 2035);
        assert_eq!(task.priority(), 1);
    }

    #[test]
    fn test_window_past_horizon_is_kept() {
        let asset = Asset::new("EQ3", "Park", "Bench", 2039, 1000.0).unwrap();
        let state = ConditionState::new("EQ3", 0.1, date()).unwrap();
        let task = TaskGenerator::new(TaskGenerationParams::default())
            .generate(&asset, &state, &horizon())
            .unwrap();
        assert_eq!(task.earliest_start(), 2044);
        assert_eq!(task.latest_end(), 2044);
    }

    #[test]
    fn test_generate_all_skips_missing_state() {
        let assets = vec![
            Asset::new("A", "P", "C", 1990, 1.0).unwrap(),
            Asset::new("B", "P", "C", 1990, 1.0).unwrap(),
        ];
        let states = vec![ConditionState::new("B", 0.5, date()).unwrap()];
        let tasks = TaskGenerator::new(TaskGenerationParams::default())
            .generate_all(&assets, &states, &horizon())
            .unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].asset_id(), "B");
        assert_eq!(tasks[0].priority(), 3);
    }
}

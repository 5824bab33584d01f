// ==========================================
// 设备维保计划系统 - 计划编排器
// ==========================================
// 用途: 协调单轮计划的执行顺序
// 流程: 输入整理 → 并行评分 → 任务派生 → 资源台账 → 贪心排程
// 生命周期: 每轮新建台账,轮次之间不共享可变状态
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::asset::{Asset, InspectionRecord};
use crate::domain::condition::ConditionState;
use crate::domain::error::ValidationError;
use crate::domain::schedule::Schedule;
use crate::domain::task::MaintenanceTask;
use crate::engine::degradation::DegradationModel;
use crate::engine::error::EngineResult;
use crate::engine::gantt::{build_gantt_rows, GanttRow};
use crate::engine::greedy_scheduler::GreedyScheduler;
use crate::engine::ledger::ResourceLedger;
use crate::engine::scoring::ScoringCoordinator;
use crate::engine::task_generator::TaskGenerator;
use crate::perf::{PerfGuard, PerformanceSummary};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};
use uuid::Uuid;

// ==========================================
// PlanningResult - 单轮计划结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct PlanningResult {
    pub cycle_id: String,
    pub states: Vec<ConditionState>,  // 与参与计划的设备顺序一致
    pub tasks: Vec<MaintenanceTask>,
    pub schedule: Schedule,
    pub performance: PerformanceSummary,
}

impl PlanningResult {
    /// 甘特图行数据
    pub fn gantt_rows(&self, assets: &[Asset]) -> Vec<GanttRow> {
        build_gantt_rows(&self.schedule, assets, &self.states)
    }
}

// ==========================================
// PlanningOrchestrator - 计划编排器
// ==========================================
pub struct PlanningOrchestrator {
    config: PlannerConfig,
    scorer: ScoringCoordinator,
    generator: TaskGenerator,
    scheduler: GreedyScheduler,
}

impl PlanningOrchestrator {
    /// 创建编排器（配置应已通过校验）
    pub fn new(config: PlannerConfig) -> Self {
        let scorer = ScoringCoordinator::new(
            DegradationModel::new(config.degradation),
            config.effective_scoring_workers(),
            config.effective_assessment_date(),
        );
        Self {
            scorer,
            generator: TaskGenerator::new(config.task),
            scheduler: GreedyScheduler::new(),
            config,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 执行一轮完整计划
    ///
    /// # 参数
    /// - assets: 设备主数据（超出 max_assets 的部分按顺序截断）
    /// - inspections: asset_id → 点检记录
    ///
    /// # 错误
    /// - 设备ID重复
    /// - 资源上限无法解析
    /// - 评分工作线程异常
    pub async fn run_cycle(
        &self,
        mut assets: Vec<Asset>,
        inspections: &HashMap<String, InspectionRecord>,
    ) -> EngineResult<PlanningResult> {
        let cycle_id = Uuid::new_v4().to_string();
        let _perf = PerfGuard::new("run_cycle");

        info!(
            cycle_id = %cycle_id,
            assets_count = assets.len(),
            inspections_count = inspections.len(),
            horizon_start = self.config.horizon.start_period,
            horizon_end = self.config.horizon.end_period,
            "开始执行计划"
        );

        // ==========================================
        // 步骤1: 输入整理
        // ==========================================
        if assets.len() > self.config.max_assets {
            warn!(
                total = assets.len(),
                max_assets = self.config.max_assets,
                "设备数超过上限,按顺序截断"
            );
            assets.truncate(self.config.max_assets);
        }
        ensure_unique_ids(&assets)?;

        // ==========================================
        // 步骤2: 并行评分
        // ==========================================
        debug!("步骤2: 并行劣化评分");
        let scoring_timer = PerfGuard::new("score_assets");
        let states = self.scorer.score_assets(&assets, inspections).await?;
        let scoring_ms = scoring_timer.elapsed_ms();
        drop(scoring_timer);

        // ==========================================
        // 步骤3: 任务派生
        // ==========================================
        debug!("步骤3: 维保任务派生");
        let tasks = self
            .generator
            .generate_all(&assets, &states, &self.config.horizon)?;

        // ==========================================
        // 步骤4: 资源台账
        // ==========================================
        debug!("步骤4: 构建资源台账");
        let capacities = self.config.resolve_capacities(assets.len())?;
        let mut ledger = ResourceLedger::new(&capacities, &self.config.horizon);

        // ==========================================
        // 步骤5: 贪心排程
        // ==========================================
        debug!("步骤5: 贪心排程");
        let solve_timer = PerfGuard::new("schedule");
        let schedule = self
            .scheduler
            .schedule(&tasks, &self.config.horizon, &mut ledger);
        let solve_ms = solve_timer.elapsed_ms();
        drop(solve_timer);

        let performance = PerformanceSummary::new(
            assets.len(),
            tasks.len(),
            scoring_ms,
            solve_ms,
            self.scorer.workers(),
        );

        info!(
            cycle_id = %cycle_id,
            scheduled = schedule.statistics.scheduled_tasks,
            unplaced = schedule.unplaced.len(),
            ratio = schedule.statistics.scheduling_ratio,
            "计划执行完成"
        );

        Ok(PlanningResult {
            cycle_id,
            states,
            tasks,
            schedule,
            performance,
        })
    }
}

fn ensure_unique_ids(assets: &[Asset]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(assets.len());
    for asset in assets {
        if !seen.insert(asset.asset_id()) {
            return Err(ValidationError::DuplicateAsset(asset.asset_id().to_string()));
        }
    }
    Ok(())
}

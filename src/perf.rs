// ==========================================
// 性能统计
// ==========================================
// PerfGuard: 作用域计时,drop 时输出 target=perf 日志
// PerformanceSummary: 单轮计划各阶段耗时与吞吐
// ==========================================

use serde::Serialize;
use std::time::Instant;

/// 性能统计 Guard：记录 elapsed_ms
///
/// 使用方式：
/// ```ignore
/// let _perf = maint_planner::perf::PerfGuard::new("score_assets");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }

    /// 已耗时（毫秒,含小数）
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(target: "perf", op = self.op, elapsed_ms, "done");
    }
}

// ==========================================
// PerformanceSummary - 单轮性能汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub asset_count: usize,
    pub task_count: usize,
    pub load_ms: f64,
    pub scoring_ms: f64,
    pub solve_ms: f64,
    pub scoring_workers: usize,
    pub assets_per_second: f64, // 评分吞吐
    pub tasks_per_second: f64,  // 排程吞吐
}

impl PerformanceSummary {
    pub fn new(
        asset_count: usize,
        task_count: usize,
        scoring_ms: f64,
        solve_ms: f64,
        scoring_workers: usize,
    ) -> Self {
        Self {
            asset_count,
            task_count,
            load_ms: 0.0,
            scoring_ms,
            solve_ms,
            scoring_workers,
            assets_per_second: per_second(asset_count, scoring_ms),
            tasks_per_second: per_second(task_count, solve_ms),
        }
    }

    /// 附加数据加载耗时（由调用方测得）
    pub fn with_load_ms(mut self, load_ms: f64) -> Self {
        self.load_ms = load_ms;
        self
    }

    pub fn total_ms(&self) -> f64 {
        self.load_ms + self.scoring_ms + self.solve_ms
    }
}

fn per_second(count: usize, elapsed_ms: f64) -> f64 {
    if elapsed_ms > 0.0 {
        count as f64 / (elapsed_ms / 1000.0)
    } else {
        0.0
    }
}

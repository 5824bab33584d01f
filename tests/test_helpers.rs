// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的设备/任务/资源上限构造、CSV 临时文件等功能
// ==========================================
#![allow(dead_code)]

use maint_planner::domain::capacity::{PlanningHorizon, ResourceCapacity};
use maint_planner::domain::task::{MaintenanceTask, TaskDraft};
use maint_planner::domain::types::ResourceDemand;
use maint_planner::Asset;
use std::io::Write;
use tempfile::NamedTempFile;

/// 创建计划期
pub fn horizon(start: i32, end: i32) -> PlanningHorizon {
    PlanningHorizon::new(start, end).unwrap()
}

/// 创建 Budget/Crew 均匀上限
pub fn uniform_capacities(horizon: &PlanningHorizon, budget: f64, crew: f64) -> Vec<ResourceCapacity> {
    vec![
        ResourceCapacity::uniform("Budget", ResourceDemand::Cost, horizon, budget).unwrap(),
        ResourceCapacity::uniform("Crew", ResourceDemand::Count, horizon, crew).unwrap(),
    ]
}

/// 创建测试用的维保任务
pub fn create_test_task(
    task_id: &str,
    priority: u8,
    earliest_start: i32,
    latest_end: i32,
    cost: f64,
    penalty_coefficient: f64,
) -> MaintenanceTask {
    MaintenanceTask::new(TaskDraft {
        task_id: task_id.to_string(),
        asset_id: format!("asset_{}", task_id),
        duration: 1,
        earliest_start,
        latest_end,
        cost,
        priority,
        penalty_coefficient,
    })
    .unwrap()
}

/// 生成 n 台确定性的测试设备（设置年份 1950-2024 循环）
pub fn create_test_assets(n: usize) -> Vec<Asset> {
    (0..n)
        .map(|i| {
            Asset::new(
                format!("EQ{:04}", i),
                format!("公园{}", i % 7),
                ["秋千", "滑梯", "攀爬架", "弹簧摇摇", "长椅"][i % 5],
                1950 + (i * 13 % 75) as i32,
                100_000.0 + (i * 7919 % 80_000) as f64,
            )
            .unwrap()
        })
        .collect()
}

/// 写入临时 CSV 文件（需要保持存活）
pub fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

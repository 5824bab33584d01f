// ==========================================
// GreedyScheduler 引擎集成测试
// ==========================================
// 测试目标: 验证约束贪心排程
// 覆盖范围: 资源上限、排序键、窗口/计划期交集、统计、确定性
// ==========================================

mod test_helpers;

use maint_planner::domain::types::UnplacedReason;
use maint_planner::engine::{GreedyScheduler, ResourceLedger};
use test_helpers::{create_test_task, horizon, uniform_capacities};

// ==========================================
// 测试用例 1: 单期上限 150, 两个任务
// ==========================================

#[test]
fn test_scheduler_single_period_ceiling() {
    println!("\n=== 测试：单期上限 ===");

    let h = horizon(2025, 2025);
    let tasks = vec![
        create_test_task("P5", 5, 2025, 2025, 100.0, 900.0),
        create_test_task("P3", 3, 2025, 2025, 100.0, 500.0),
    ];

    let schedule =
        GreedyScheduler::new().schedule_with_capacities(&tasks, &h, &uniform_capacities(&h, 150.0, 10.0));

    println!("  - 已排: {}", schedule.statistics.scheduled_tasks);
    println!("  - 未排: {}", schedule.unplaced.len());

    assert_eq!(schedule.entries.len(), 1, "只应排入优先级 5 的任务");
    assert_eq!(schedule.entries[0].task_id, "P5");
    assert_eq!(schedule.statistics.scheduling_ratio, 0.5);
    assert_eq!(schedule.statistics.total_cost, 100.0);
    assert_eq!(schedule.unplaced[0].task_id, "P3");

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 2: 窗口在计划期之外
// ==========================================

#[test]
fn test_scheduler_window_outside_horizon() {
    println!("\n=== 测试：窗口在计划期之外 ===");

    let h = horizon(2020, 2024);
    let tasks = vec![create_test_task("T1", 5, 2025, 2025, 10.0, 100.0)];

    let schedule = GreedyScheduler::new().schedule_with_capacities(
        &tasks,
        &h,
        &uniform_capacities(&h, 1_000_000.0, 10.0),
    );

    assert!(schedule.entries.is_empty(), "不应产生排程明细");
    assert_eq!(schedule.unplaced.len(), 1);
    assert_eq!(schedule.unplaced[0].reason, UnplacedReason::WindowOutsideHorizon);
    assert_eq!(schedule.statistics.total_tasks, 1);
    assert_eq!(schedule.statistics.scheduling_ratio, 0.0);

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 3: 上限永不突破
// ==========================================

#[test]
fn test_scheduler_never_exceeds_ceilings() {
    println!("\n=== 测试：上限永不突破 ===");

    let h = horizon(2025, 2030);
    let tasks: Vec<_> = (0..200)
        .map(|i| {
            create_test_task(
                &format!("T{:03}", i),
                (i % 5 + 1) as u8,
                2025 + (i % 4) as i32,
                2025 + (i % 4) as i32 + (i % 5) as i32,
                1_000.0 + (i * 37 % 9_000) as f64,
                (i * 13 % 1000) as f64,
            )
        })
        .collect();
    let budget = 40_000.0;
    let crew = 6.0;

    let schedule =
        GreedyScheduler::new().schedule_with_capacities(&tasks, &h, &uniform_capacities(&h, budget, crew));

    for (resource, series) in &schedule.resource_usage {
        for (period, usage) in series {
            assert!(
                usage.used <= usage.ceiling,
                "资源 {} 在 {} 期超限: {} > {}",
                resource,
                period,
                usage.used,
                usage.ceiling
            );
        }
    }

    let ratio = schedule.statistics.scheduling_ratio;
    assert!((0.0..=1.0).contains(&ratio));
    assert_eq!(
        schedule.entries.len() + schedule.unplaced.len(),
        tasks.len(),
        "每个任务要么落位要么记为未排"
    );

    // 落位期必须在窗口与计划期交集内
    for entry in &schedule.entries {
        let task = tasks.iter().find(|t| t.task_id() == entry.task_id).unwrap();
        assert!(entry.scheduled_period >= task.earliest_start());
        assert!(entry.scheduled_period <= task.latest_end());
        assert!(h.contains(entry.scheduled_period));
    }

    println!("  - 落位率: {:.1}%", ratio * 100.0);
    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 4: 外部台账与确定性
// ==========================================

#[test]
fn test_scheduler_is_deterministic() {
    println!("\n=== 测试：确定性 ===");

    let h = horizon(2025, 2027);
    let tasks: Vec<_> = (0..30)
        .map(|i| create_test_task(&format!("T{}", i), 3, 2025, 2027, 100.0, 10.0))
        .collect();
    let capacities = uniform_capacities(&h, 500.0, 4.0);

    let scheduler = GreedyScheduler::new();
    let mut ledger_a = ResourceLedger::new(&capacities, &h);
    let mut ledger_b = ResourceLedger::new(&capacities, &h);
    let a = scheduler.schedule(&tasks, &h, &mut ledger_a);
    let b = scheduler.schedule(&tasks, &h, &mut ledger_b);

    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );

    // 完全同键时按输入顺序落位
    let first_period: Vec<&str> = a
        .entries
        .iter()
        .filter(|e| e.scheduled_period == 2025)
        .map(|e| e.task_id.as_str())
        .collect();
    assert_eq!(first_period, vec!["T0", "T1", "T2", "T3"]);

    // 台账与结果一致
    assert_eq!(ledger_a.used("Crew", 2025), Some(4.0));
    assert_eq!(a.statistics.scheduled_tasks, 12);

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 5: 延迟罚金汇总
// ==========================================

#[test]
fn test_scheduler_penalty_totals() {
    let h = horizon(2025, 2026);
    let tasks = vec![
        create_test_task("A", 5, 2025, 2026, 1_000.0, 500.0),
        create_test_task("B", 5, 2025, 2026, 1_000.0, 400.0),
    ];

    let schedule =
        GreedyScheduler::new().schedule_with_capacities(&tasks, &h, &uniform_capacities(&h, 1_000.0, 10.0));

    let a = schedule.entry("A").unwrap();
    let b = schedule.entry("B").unwrap();
    assert_eq!(a.scheduled_period, 2025);
    assert_eq!(b.scheduled_period, 2026);
    // 400 × 1 × 1000 × 0.001
    assert!((b.penalty - 400.0).abs() < 1e-9);
    assert!((schedule.statistics.total_penalty - 400.0).abs() < 1e-9);
    assert_eq!(schedule.statistics.total_cost, 2_000.0);
}

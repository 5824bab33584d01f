// ==========================================
// 设备维保计划系统 - 任务排序引擎
// ==========================================
// 职责: 为全部任务建立确定的全序
// 排序键:
// 1) priority 降序
// 2) latest_end 升序 (窗口越早截止越优先)
// 3) penalty_coefficient 降序
// 4) 输入顺序升序 (保证确定性)
// ==========================================

use crate::domain::task::MaintenanceTask;
use serde_json::json;
use std::cmp::Ordering;

// ==========================================
// TaskPrioritySorter - 任务排序引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskPrioritySorter;

impl TaskPrioritySorter {
    pub fn new() -> Self {
        Self
    }

    /// 返回按优先顺序排列的任务下标
    pub fn order(&self, tasks: &[MaintenanceTask]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        indices.sort_by(|&a, &b| self.compare((a, &tasks[a]), (b, &tasks[b])));
        indices
    }

    /// 比较两个任务
    ///
    /// Ordering::Less 表示 a 优先于 b
    fn compare(&self, a: (usize, &MaintenanceTask), b: (usize, &MaintenanceTask)) -> Ordering {
        let (index_a, task_a) = a;
        let (index_b, task_b) = b;

        // 1. priority 降序
        match task_b.priority().cmp(&task_a.priority()) {
            Ordering::Equal => {}
            other => return other,
        }

        // 2. latest_end 升序
        match task_a.latest_end().cmp(&task_b.latest_end()) {
            Ordering::Equal => {}
            other => return other,
        }

        // 3. penalty_coefficient 降序
        match task_b
            .penalty_coefficient()
            .total_cmp(&task_a.penalty_coefficient())
        {
            Ordering::Equal => {}
            other => return other,
        }

        // 4. 输入顺序
        index_a.cmp(&index_b)
    }

    /// 生成排序原因 (可解释性)
    pub fn sort_reason(&self, task: &MaintenanceTask, rank: usize) -> String {
        json!({
            "rank": rank,
            "sort_keys": {
                "priority": task.priority(),
                "latest_end": task.latest_end(),
                "penalty_coefficient": task.penalty_coefficient(),
            }
        })
        .to_string()
    }
}

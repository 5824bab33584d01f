// ==========================================
// 设备维保计划系统 - 甘特图数据
// ==========================================
// 职责: 把排程明细整理为展示用的行数据
// 说明: 只整理数据,不负责绘制
// ==========================================

use crate::domain::asset::Asset;
use crate::domain::condition::ConditionState;
use crate::domain::schedule::Schedule;
use crate::domain::types::Period;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GanttRow {
    pub label: String,    // 设置场所 - 设备种类
    pub start: Period,
    pub finish: Period,
    pub resource: String, // Grade-X
    pub cost: f64,
    pub priority: u8,
    pub penalty: f64,
}

/// 按排程明细顺序生成甘特行
///
/// 找不到设备的明细跳过;缺少劣化状态时 resource 为 "Grade-?"
pub fn build_gantt_rows(
    schedule: &Schedule,
    assets: &[Asset],
    states: &[ConditionState],
) -> Vec<GanttRow> {
    let assets_by_id: HashMap<&str, &Asset> = assets.iter().map(|a| (a.asset_id(), a)).collect();
    let grades: HashMap<&str, String> = states
        .iter()
        .map(|s| (s.asset_id(), s.grade().to_string()))
        .collect();

    schedule
        .entries
        .iter()
        .filter_map(|entry| {
            let Some(asset) = assets_by_id.get(entry.asset_id.as_str()) else {
                warn!(asset_id = %entry.asset_id, "甘特图: 未知设备,跳过");
                return None;
            };
            let grade = grades
                .get(entry.asset_id.as_str())
                .map(String::as_str)
                .unwrap_or("?");
            Some(GanttRow {
                label: asset.label(),
                start: entry.scheduled_period,
                finish: entry.scheduled_period,
                resource: format!("Grade-{}", grade),
                cost: entry.cost,
                priority: entry.priority,
                penalty: entry.penalty,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::ScheduleEntry;
    use chrono::NaiveDate;

    fn entry(asset_id: &str, period: i32) -> ScheduleEntry {
        ScheduleEntry {
            task_id: format!("repair_{}", asset_id),
            asset_id: asset_id.to_string(),
            scheduled_period: period,
            cost: 100.0,
            priority: 5,
            delay_periods: 0,
            penalty: 0.0,
        }
    }

    #[test]
    fn test_rows_follow_entries_and_skip_unknown_assets() {
        let schedule = Schedule {
            entries: vec![entry("EQ1", 2026), entry("GHOST", 2027)],
            ..Default::default()
        };
        let assets = vec![Asset::new("EQ1", "北公园", "秋千", 1970, 100.0).unwrap()];
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let states = vec![ConditionState::new("EQ1", 0.91, date).unwrap()];

        let rows = build_gantt_rows(&schedule, &assets, &states);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "北公园 - 秋千");
        assert_eq!(rows[0].resource, "Grade-E");
        assert_eq!(rows[0].start, 2026);
        assert_eq!(rows[0].finish, 2026);
    }
}

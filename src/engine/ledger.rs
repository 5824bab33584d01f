// ==========================================
// 设备维保计划系统 - 资源台账
// ==========================================
// 职责: 按资源 × 期次累计占用,守护上限
// 红线: 只能通过 try_commit 追加占用,检查与写入不可分割
// 并发: 单写者 (&mut self),需要并发落位时须外加互斥
// ==========================================

use crate::domain::capacity::{
    CapacityConstraint, PeriodUsage, PlanningHorizon, ResourceCapacity,
};
use crate::domain::schedule::ResourceUsageSeries;
use crate::domain::types::{Period, ResourceDemand};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone)]
struct ResourceAccount {
    demand: ResourceDemand,
    periods: BTreeMap<Period, PeriodUsage>,
}

impl ResourceAccount {
    fn delta_for(&self, cost_delta: f64, count_delta: f64) -> f64 {
        match self.demand {
            ResourceDemand::Cost => cost_delta,
            ResourceDemand::Count => count_delta,
        }
    }
}

// ==========================================
// ResourceLedger - 资源台账
// ==========================================
#[derive(Debug, Clone)]
pub struct ResourceLedger {
    accounts: BTreeMap<String, ResourceAccount>,
}

impl ResourceLedger {
    /// 以计划期内各期上限初始化台账（已用量为 0）
    pub fn new(capacities: &[ResourceCapacity], horizon: &PlanningHorizon) -> Self {
        let accounts = capacities
            .iter()
            .map(|capacity| {
                let periods = horizon
                    .periods()
                    .map(|p| {
                        (
                            p,
                            PeriodUsage {
                                used: 0.0,
                                ceiling: capacity.ceiling(p),
                            },
                        )
                    })
                    .collect();
                (
                    capacity.name.clone(),
                    ResourceAccount {
                        demand: capacity.demand,
                        periods,
                    },
                )
            })
            .collect();

        Self { accounts }
    }

    /// 剩余容量（资源或期次未登记返回 None）
    pub fn remaining(&self, resource: &str, period: Period) -> Option<f64> {
        self.accounts
            .get(resource)
            .and_then(|account| account.periods.get(&period))
            .map(|usage| usage.remaining())
    }

    /// 已用量（资源或期次未登记返回 None）
    pub fn used(&self, resource: &str, period: Period) -> Option<f64> {
        self.accounts
            .get(resource)
            .and_then(|account| account.periods.get(&period))
            .map(|usage| usage.used)
    }

    /// 原子地检查并追加占用
    ///
    /// 所有参与资源在该期均不超上限时才同时写入,否则台账保持不变。
    /// 未登记的期次一律不可落位。
    pub fn try_commit(&mut self, period: Period, cost_delta: f64, count_delta: f64) -> bool {
        debug_assert!(cost_delta >= 0.0 && count_delta >= 0.0);

        // 1. 检查
        for account in self.accounts.values() {
            let Some(usage) = account.periods.get(&period) else {
                return false;
            };
            if !usage.can_add(account.delta_for(cost_delta, count_delta)) {
                return false;
            }
        }

        // 2. 写入
        for (name, account) in self.accounts.iter_mut() {
            let delta = account.delta_for(cost_delta, count_delta);
            if let Some(usage) = account.periods.get_mut(&period) {
                usage.used += delta;
                assert!(
                    !usage.is_overflow(),
                    "资源台账超限: resource={}, period={}, used={}, ceiling={}",
                    name,
                    period,
                    usage.used,
                    usage.ceiling
                );
            }
        }

        debug!(period, cost_delta, count_delta, "资源占用已提交");
        true
    }

    /// 分期占用快照
    pub fn usage_series(&self) -> ResourceUsageSeries {
        self.accounts
            .iter()
            .map(|(name, account)| (name.clone(), account.periods.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(budget: f64, crew: f64) -> ResourceLedger {
        let horizon = PlanningHorizon::new(2025, 2026).unwrap();
        let capacities = vec![
            ResourceCapacity::uniform("Budget", ResourceDemand::Cost, &horizon, budget).unwrap(),
            ResourceCapacity::uniform("Crew", ResourceDemand::Count, &horizon, crew).unwrap(),
        ];
        ResourceLedger::new(&capacities, &horizon)
    }

    #[test]
    fn test_commit_applies_both_deltas() {
        let mut l = ledger(150.0, 5.0);
        assert!(l.try_commit(2025, 100.0, 1.0));
        assert_eq!(l.used("Budget", 2025), Some(100.0));
        assert_eq!(l.used("Crew", 2025), Some(1.0));
        assert_eq!(l.remaining("Budget", 2025), Some(50.0));
        assert_eq!(l.remaining("Crew", 2025), Some(4.0));
        assert_eq!(l.used("Budget", 2026), Some(0.0));
    }

    #[test]
    fn test_budget_failure_leaves_state_unchanged() {
        let mut l = ledger(150.0, 5.0);
        assert!(l.try_commit(2025, 100.0, 1.0));
        assert!(!l.try_commit(2025, 100.0, 1.0));
        assert_eq!(l.used("Budget", 2025), Some(100.0));
        assert_eq!(l.used("Crew", 2025), Some(1.0));
    }

    #[test]
    fn test_crew_failure_leaves_budget_unchanged() {
        let mut l = ledger(1000.0, 1.0);
        assert!(l.try_commit(2025, 10.0, 1.0));
        assert!(!l.try_commit(2025, 10.0, 1.0));
        assert_eq!(l.used("Budget", 2025), Some(10.0));
    }

    #[test]
    fn test_exact_fit_is_allowed() {
        let mut l = ledger(150.0, 1.0);
        assert!(l.try_commit(2025, 150.0, 1.0));
        assert_eq!(l.remaining("Budget", 2025), Some(0.0));
    }

    #[test]
    fn test_untracked_period_is_rejected() {
        let mut l = ledger(150.0, 5.0);
        assert!(!l.try_commit(2030, 1.0, 1.0));
        assert_eq!(l.remaining("Budget", 2030), None);
        assert_eq!(l.remaining("Unknown", 2025), None);
    }

    #[test]
    fn test_usage_series_snapshot() {
        let mut l = ledger(150.0, 5.0);
        l.try_commit(2026, 40.0, 1.0);
        let series = l.usage_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series["Budget"][&2026].used, 40.0);
        assert_eq!(series["Budget"][&2026].ceiling, 150.0);
        assert_eq!(series["Crew"][&2025].used, 0.0);
    }
}

// ==========================================
// 设备维保计划系统 - 并行评分协调器
// ==========================================
// 职责: 将资产列表分块并行评分,结果按输入顺序返回
// 并发: 每块一个 blocking 任务,块内无共享可变状态
// 红线: 结果与顺序执行逐项一致（评分为纯函数）
// ==========================================

use crate::domain::asset::{Asset, InspectionRecord};
use crate::domain::condition::ConditionState;
use crate::engine::degradation::DegradationModel;
use crate::engine::error::{EngineError, EngineResult};
use chrono::NaiveDate;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// 有序并行映射
///
/// 输入按 ceil(n / workers) 切块,每块在 blocking 线程池执行;
/// workers <= 1 或输入不足两项时直接在当前线程执行。
/// 任一块异常（panic/取消）整体返回 EngineError::Worker。
pub async fn parallel_map<T, R, F>(items: Vec<T>, workers: usize, f: F) -> EngineResult<Vec<R>>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> R + Send + Sync + 'static,
{
    let total = items.len();
    if workers <= 1 || total < 2 {
        return Ok(items.into_iter().map(f).collect());
    }

    let chunk_size = total.div_ceil(workers);
    let f = Arc::new(f);

    // 切块（保持顺序）
    let mut chunks: Vec<Vec<T>> = Vec::with_capacity(workers);
    let mut iter = items.into_iter().peekable();
    while iter.peek().is_some() {
        chunks.push(iter.by_ref().take(chunk_size).collect());
    }

    debug!(total, workers, chunk_size, chunks = chunks.len(), "评分任务已分块");

    let handles = chunks.into_iter().map(|chunk| {
        let f = Arc::clone(&f);
        tokio::task::spawn_blocking(move || chunk.into_iter().map(&*f).collect::<Vec<R>>())
    });

    let results = join_all(handles).await;

    let mut merged = Vec::with_capacity(total);
    for (chunk, result) in results.into_iter().enumerate() {
        let part = result.map_err(|e| EngineError::Worker {
            chunk,
            message: e.to_string(),
        })?;
        merged.extend(part);
    }
    Ok(merged)
}

// ==========================================
// ScoringCoordinator - 并行评分协调器
// ==========================================
#[derive(Debug, Clone)]
pub struct ScoringCoordinator {
    model: DegradationModel,
    workers: usize,
    assessment_date: NaiveDate,
}

impl ScoringCoordinator {
    pub fn new(model: DegradationModel, workers: usize, assessment_date: NaiveDate) -> Self {
        Self {
            model,
            workers: workers.max(1),
            assessment_date,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// 顺序评分（单线程基准）
    pub fn score_sequential(
        &self,
        assets: &[Asset],
        inspections: &HashMap<String, InspectionRecord>,
    ) -> EngineResult<Vec<ConditionState>> {
        assets
            .iter()
            .map(|asset| {
                let score = self.model.score(asset, inspections.get(asset.asset_id()));
                ConditionState::new(asset.asset_id(), score, self.assessment_date)
                    .map_err(EngineError::from)
            })
            .collect()
    }

    /// 并行评分
    ///
    /// 返回顺序与 assets 一致;缺少点检记录的资产按默认等级评分
    #[instrument(skip(self, assets, inspections), fields(
        assets_count = assets.len(),
        workers = self.workers
    ))]
    pub async fn score_assets(
        &self,
        assets: &[Asset],
        inspections: &HashMap<String, InspectionRecord>,
    ) -> EngineResult<Vec<ConditionState>> {
        let inputs: Vec<(Asset, Option<InspectionRecord>)> = assets
            .iter()
            .map(|a| (a.clone(), inspections.get(a.asset_id()).cloned()))
            .collect();

        let model = self.model;
        let date = self.assessment_date;
        let results = parallel_map(inputs, self.workers, move |(asset, inspection)| {
            let score = model.score(&asset, inspection.as_ref());
            ConditionState::new(asset.asset_id(), score, date)
        })
        .await?;

        let states = results
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        info!(scored = states.len(), "劣化评分完成");
        Ok(states)
    }
}

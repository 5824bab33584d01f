// ==========================================
// 设备维保计划系统 - 延迟罚金模型
// ==========================================
// penalty = coefficient × delay × cost × 0.001
// 无延迟时为 0; 对三个输入单调不减; 不设上限
// ==========================================

/// 罚金费率（按修缮费用的千分之一计）
pub const PENALTY_RATE: f64 = 0.001;

#[derive(Debug, Clone, Copy, Default)]
pub struct PenaltyModel;

impl PenaltyModel {
    pub fn new() -> Self {
        Self
    }

    /// 计算延迟罚金
    pub fn penalty(&self, coefficient: f64, delay_periods: u32, cost: f64) -> f64 {
        if delay_periods == 0 {
            return 0.0;
        }
        coefficient * delay_periods as f64 * cost * PENALTY_RATE
    }
}

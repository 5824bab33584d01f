// ==========================================
// 设备维保计划系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 任务无法落位不是错误,不在此列
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::error::ValidationError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("输入校验失败: {0}")]
    Validation(#[from] ValidationError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("评分工作线程异常 (chunk={chunk}): {message}")]
    Worker { chunk: usize, message: String },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

// ==========================================
// 设备维保计划系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 行号: 表头为第 1 行,数据从第 2 行开始
// ==========================================

use crate::domain::error::ValidationError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("类型转换失败 (行 {row}, 字段 {field}): {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    #[error("必填字段缺失 (行 {row}): {field}")]
    MissingField { row: usize, field: String },

    // ===== 数据质量错误 =====
    #[error("主键缺失 (行 {0}): asset_id 为空")]
    PrimaryKeyMissing(usize),

    #[error("数据校验失败 (行 {row}): {source}")]
    Validation {
        row: usize,
        #[source]
        source: ValidationError,
    },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

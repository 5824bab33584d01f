// ==========================================
// 设备维保计划系统 - 导入层
// ==========================================
// 职责: 外部数据导入,生成领域对象
// 支持: CSV
// ==========================================

// 模块声明
pub mod asset_importer;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod inspection_importer;

// 重导出核心类型
pub use asset_importer::AssetCsvImporter;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, FileParser, RawRow};
pub use inspection_importer::InspectionCsvImporter;

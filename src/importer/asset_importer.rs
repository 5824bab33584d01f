// ==========================================
// 设备维保计划系统 - 设备主数据导入
// ==========================================
// 流程: 文件解析 → 字段映射 → 领域校验
// 红线: 任一行失败即整体失败（报告行号）,不做部分导入
// ==========================================

use crate::domain::asset::{Asset, DEFAULT_REPAIR_COST};
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{CsvParser, FileParser};
use std::path::Path;
use tracing::{info, instrument};

pub struct AssetCsvImporter<P: FileParser = CsvParser> {
    parser: P,
    mapper: FieldMapper,
    default_repair_cost: f64,
}

impl AssetCsvImporter<CsvParser> {
    pub fn new(default_repair_cost: f64) -> Self {
        Self::with_parser(CsvParser, default_repair_cost)
    }
}

impl Default for AssetCsvImporter<CsvParser> {
    fn default() -> Self {
        Self::new(DEFAULT_REPAIR_COST)
    }
}

impl<P: FileParser> AssetCsvImporter<P> {
    pub fn with_parser(parser: P, default_repair_cost: f64) -> Self {
        Self {
            parser,
            mapper: FieldMapper,
            default_repair_cost,
        }
    }

    /// 导入设备主数据（保持文件顺序）
    #[instrument(skip(self), fields(file = %file_path.display()))]
    pub fn import(&self, file_path: &Path) -> ImportResult<Vec<Asset>> {
        let rows = self.parser.parse_to_raw_records(file_path)?;
        let assets = rows
            .iter()
            .map(|row| self.mapper.map_to_asset(row, self.default_repair_cost))
            .collect::<ImportResult<Vec<_>>>()?;

        info!(count = assets.len(), "设备主数据导入完成");
        Ok(assets)
    }
}

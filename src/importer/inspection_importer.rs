// ==========================================
// 设备维保计划系统 - 点检记录导入
// ==========================================
// 文件不存在时不报错: 告警并返回空表,评分按默认等级
// 同一设备多行时后出现的记录生效
// ==========================================

use crate::domain::asset::InspectionRecord;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{CsvParser, FileParser};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

#[derive(Default)]
pub struct InspectionCsvImporter<P: FileParser = CsvParser> {
    parser: P,
    mapper: FieldMapper,
}

impl InspectionCsvImporter<CsvParser> {
    pub fn new() -> Self {
        Self::with_parser(CsvParser)
    }
}

impl<P: FileParser> InspectionCsvImporter<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            mapper: FieldMapper,
        }
    }

    /// 导入点检记录 → asset_id 索引
    #[instrument(skip(self), fields(file = %file_path.display()))]
    pub fn import(&self, file_path: &Path) -> ImportResult<HashMap<String, InspectionRecord>> {
        if !file_path.exists() {
            warn!("点检文件不存在,全部设备按默认等级评分");
            return Ok(HashMap::new());
        }

        let rows = self.parser.parse_to_raw_records(file_path)?;
        let mut records = HashMap::with_capacity(rows.len());
        for row in &rows {
            let record = self.mapper.map_to_inspection(row)?;
            if let Some(previous) = records.insert(record.asset_id.clone(), record) {
                debug!(
                    asset_id = %previous.asset_id,
                    row = row.row_number,
                    "点检记录重复,以后出现的为准"
                );
            }
        }

        info!(count = records.len(), "点检记录导入完成");
        Ok(records)
    }
}

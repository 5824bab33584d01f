// ==========================================
// 设备维保计划系统 - 字段映射器
// ==========================================
// 职责: 源字段 → 领域对象映射 + 类型转换
// 设备表: asset_id / site_name / category / install_year / repair_cost(可选)
// 点检表: asset_id / grade / inspection_date(可选)
// ==========================================

use crate::domain::asset::{Asset, InspectionRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRow;
use std::collections::HashMap;

pub const COL_ASSET_ID: &str = "asset_id";
pub const COL_SITE_NAME: &str = "site_name";
pub const COL_CATEGORY: &str = "category";
pub const COL_INSTALL_YEAR: &str = "install_year";
pub const COL_REPAIR_COST: &str = "repair_cost";
pub const COL_GRADE: &str = "grade";
pub const COL_INSPECTION_DATE: &str = "inspection_date";

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper;

impl FieldMapper {
    /// 行记录 → 设备主数据
    ///
    /// repair_cost 为空时取 default_repair_cost
    pub fn map_to_asset(&self, row: &RawRow, default_repair_cost: f64) -> ImportResult<Asset> {
        let fields = &row.fields;
        let asset_id = self
            .get_string(fields, COL_ASSET_ID)
            .ok_or(ImportError::PrimaryKeyMissing(row.row_number))?;
        let install_year = self
            .parse_i32(fields, COL_INSTALL_YEAR, row.row_number)?
            .ok_or_else(|| ImportError::MissingField {
                row: row.row_number,
                field: COL_INSTALL_YEAR.to_string(),
            })?;
        let repair_cost = self
            .parse_f64(fields, COL_REPAIR_COST, row.row_number)?
            .unwrap_or(default_repair_cost);

        Asset::new(
            asset_id,
            self.get_string(fields, COL_SITE_NAME).unwrap_or_default(),
            self.get_string(fields, COL_CATEGORY).unwrap_or_default(),
            install_year,
            repair_cost,
        )
        .map_err(|source| ImportError::Validation {
            row: row.row_number,
            source,
        })
    }

    /// 行记录 → 点检记录（判定字母保留原文）
    pub fn map_to_inspection(&self, row: &RawRow) -> ImportResult<InspectionRecord> {
        let fields = &row.fields;
        let asset_id = self
            .get_string(fields, COL_ASSET_ID)
            .ok_or(ImportError::PrimaryKeyMissing(row.row_number))?;

        Ok(InspectionRecord {
            asset_id,
            grade: self.get_string(fields, COL_GRADE),
            inspection_date: self.get_string(fields, COL_INSPECTION_DATE),
        })
    }

    /// 提取字符串字段（空值返回 None），支持列名别名
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        // 兼容旧版导出文件的列名
        let aliases: &[&str] = match key {
            COL_ASSET_ID => &[COL_ASSET_ID, "equipment_id"],
            COL_SITE_NAME => &[COL_SITE_NAME, "park_name", "公園名"],
            COL_CATEGORY => &[COL_CATEGORY, "equipment_type"],
            COL_INSTALL_YEAR => &[COL_INSTALL_YEAR, "西暦年"],
            COL_GRADE => &[COL_GRADE, "劣化判定"],
            _ => &[],
        };

        std::iter::once(key)
            .chain(aliases.iter().copied())
            .filter_map(|alias| row.get(alias))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// 解析浮点数
    fn parse_f64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<f64>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => value
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ImportError::TypeConversionError {
                    row: row_number,
                    field: key.to_string(),
                    message: format!("无法解析为浮点数: {}", value),
                }),
        }
    }

    /// 解析整数（兼容 "1970.0" 形式）
    fn parse_i32(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<i32>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => value
                .parse::<i32>()
                .ok()
                .or_else(|| {
                    value
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.fract() == 0.0 && f.abs() <= i32::MAX as f64)
                        .map(|f| f as i32)
                })
                .map(Some)
                .ok_or_else(|| ImportError::TypeConversionError {
                    row: row_number,
                    field: key.to_string(),
                    message: format!("无法解析为整数: {}", value),
                }),
        }
    }
}

// ==========================================
// 设备维保计划系统 - 文件解析器
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: CSV (.csv)
// 输出: 原始行记录（列名 → 去除首尾空白的值）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 原始行记录
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub row_number: usize, // 文件行号（表头为第 1 行）
    pub fields: HashMap<String, String>,
}

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 行记录列表（已跳过完全空白的行）
    /// - Err: 文件不存在、格式错误、读取错误
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// CSV Parser 实现
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        // 打开 CSV 文件
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头（去除 UTF-8 BOM）
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        // 读取所有行
        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let mut fields = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    fields.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if fields.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(RawRow {
                row_number: row_idx + 2,
                fields,
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_parser_trims_and_skips_blank_rows() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, " asset_id , grade").unwrap();
        writeln!(file, "EQ1 ,  e ").unwrap();
        writeln!(file, ",").unwrap();
        writeln!(file, "EQ2,B").unwrap();

        let rows = CsvParser.parse_to_raw_records(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields["asset_id"], "EQ1");
        assert_eq!(rows[0].fields["grade"], "e");
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[1].row_number, 4);
    }

    #[test]
    fn test_csv_parser_rejects_missing_file() {
        let err = CsvParser
            .parse_to_raw_records(Path::new("/nonexistent/assets.csv"))
            .unwrap_err();
        assert!(matches!(err, ImportError::FileNotFound(_)));
    }

    #[test]
    fn test_csv_parser_rejects_other_extensions() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = CsvParser.parse_to_raw_records(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(_)));
    }
}

// ==========================================
// 机尾调换优化系统 - 文件解析器实现
// ==========================================
// 支持: CSV (.csv) → 以表头为键的原始行记录
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// 原始行记录 (列名 → 单元格文本)
pub type RawRecord = HashMap<String, String>;

// ==========================================
// Trait: FileParser
// ==========================================
// 用途: 文件 → 原始行记录
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录
    ///
    /// # 返回
    /// - Ok(Vec<RawRecord>): 行记录列表 (已跳过全空行)
    /// - Err: 文件不存在、格式错误
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>>;
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 按表头把一行拼成记录; 短行缺失的列不出现在记录中
    fn zip_row(headers: &StringRecord, record: &StringRecord) -> RawRecord {
        headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect()
    }
}

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, path: &Path) -> ImportResult<Vec<RawRecord>> {
        if !path.is_file() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let is_csv = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(true);
        if !is_csv {
            let ext = path.extension().unwrap_or_default();
            return Err(ImportError::UnsupportedFormat(ext.to_string_lossy().into_owned()));
        }

        // 表头与单元格统一去除首尾空白, 行长度可不一致
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_path(path)?;
        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = Self::zip_row(&headers, &result?);
            if row.values().any(|value| !value.is_empty()) {
                records.push(row);
            }
        }

        debug!(path = %path.display(), rows = records.len(), "CSV 解析完成");
        Ok(records)
    }
}

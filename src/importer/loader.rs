// ==========================================
// 机尾调换优化系统 - 输入文件加载
// ==========================================
// 职责: 按扩展名选择解析方式
// - .json: 直接反序列化 (数组或带 fleet/legs 包装)
// - .csv: CsvParser + RecordMapper
// ==========================================

use crate::domain::aircraft::Aircraft;
use crate::domain::rotation::FlightLeg;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{CsvParser, FileParser};
use crate::importer::record_mapper::RecordMapper;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Deserialize)]
#[serde(untagged)]
enum FleetDocument {
    Wrapped { fleet: Vec<Aircraft> },
    Bare(Vec<Aircraft>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LegsDocument {
    Wrapped { legs: Vec<FlightLeg> },
    Bare(Vec<FlightLeg>),
}

/// 读取并反序列化 JSON 文件
pub fn load_json<T: DeserializeOwned>(path: &Path) -> ImportResult<T> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// 加载机队 (.json / .csv)
pub fn load_fleet(path: &Path) -> ImportResult<Vec<Aircraft>> {
    let fleet = match extension_of(path).as_str() {
        "json" => match load_json::<FleetDocument>(path)? {
            FleetDocument::Wrapped { fleet } => fleet,
            FleetDocument::Bare(fleet) => fleet,
        },
        "csv" => {
            let rows = CsvParser.parse_to_raw_records(path)?;
            RecordMapper.map_fleet(&rows)?
        }
        other => return Err(ImportError::UnsupportedFormat(other.to_string())),
    };

    info!(path = %path.display(), aircraft_count = fleet.len(), "机队数据加载完成");
    Ok(fleet)
}

/// 加载航段 (.json / .csv)
pub fn load_legs(path: &Path) -> ImportResult<Vec<FlightLeg>> {
    let legs = match extension_of(path).as_str() {
        "json" => match load_json::<LegsDocument>(path)? {
            LegsDocument::Wrapped { legs } => legs,
            LegsDocument::Bare(legs) => legs,
        },
        "csv" => {
            let rows = CsvParser.parse_to_raw_records(path)?;
            RecordMapper.map_legs(&rows)
        }
        other => return Err(ImportError::UnsupportedFormat(other.to_string())),
    };

    info!(path = %path.display(), leg_count = legs.len(), "航段数据加载完成");
    Ok(legs)
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

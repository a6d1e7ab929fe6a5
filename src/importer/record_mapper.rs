// ==========================================
// 机尾调换优化系统 - 字段映射器
// ==========================================
// 职责: 原始行记录 → Aircraft / FlightLeg
// 列名: 同时接受 camelCase (上游接口) 与 snake_case
// 缺失: 数值 → 0, 字符串 → "", 时刻 → "00:00"
// 非法: 数值字段有值但无法解析 → TypeConversionError
// ==========================================

use crate::domain::aircraft::Aircraft;
use crate::domain::rotation::FlightLeg;
use crate::domain::types::LegStatus;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRecord;

pub struct RecordMapper;

impl RecordMapper {
    /// 映射飞机记录
    ///
    /// # 参数
    /// - row: 原始行记录
    /// - row_number: 数据行序号 (从 1 开始,用于报错定位)
    pub fn map_aircraft(&self, row: &RawRecord, row_number: usize) -> ImportResult<Aircraft> {
        Ok(Aircraft {
            tail_number: self.get_string(row, "tailNumber").unwrap_or_default(),
            aircraft_type: self.get_string(row, "type").unwrap_or_default(),
            age_years: self.parse_small_count(row, "ageYears", row_number)?,
            cycles: self.parse_count(row, "cycles", row_number)?,
            snag_count: self.parse_small_count(row, "snagCount", row_number)?,
            last_maintenance: self.get_string(row, "lastMaintenance"),
        })
    }

    /// 映射航段记录
    ///
    /// 航段只有字符串字段,缺失按默认值补齐,不会失败
    pub fn map_leg(&self, row: &RawRecord) -> FlightLeg {
        let defaults = FlightLeg::default();

        FlightLeg {
            id: self.get_string(row, "id").unwrap_or_default(),
            flight_number: self.get_string(row, "flightNumber").unwrap_or_default(),
            origin: self.get_string(row, "origin").unwrap_or_default(),
            destination: self.get_string(row, "destination").unwrap_or_default(),
            sched_dep: self
                .get_string(row, "schedDep")
                .unwrap_or(defaults.sched_dep),
            sched_arr: self
                .get_string(row, "schedArr")
                .unwrap_or(defaults.sched_arr),
            status: self
                .get_string(row, "status")
                .map(|s| LegStatus::from_str(&s))
                .unwrap_or_default(),
        }
    }

    /// 批量映射飞机记录
    pub fn map_fleet(&self, rows: &[RawRecord]) -> ImportResult<Vec<Aircraft>> {
        rows.iter()
            .enumerate()
            .map(|(idx, row)| self.map_aircraft(row, idx + 1))
            .collect()
    }

    /// 批量映射航段记录
    pub fn map_legs(&self, rows: &[RawRecord]) -> Vec<FlightLeg> {
        rows.iter().map(|row| self.map_leg(row)).collect()
    }

    /// 提取字符串字段,支持多个可能的列名（别名）
    fn get_string(&self, row: &RawRecord, key: &str) -> Option<String> {
        let aliases: &[&str] = match key {
            "tailNumber" => &["tailNumber", "tail_number", "tail"],
            "type" => &["type", "aircraftType", "aircraft_type"],
            "ageYears" => &["ageYears", "age_years"],
            "snagCount" => &["snagCount", "snag_count"],
            "lastMaintenance" => &["lastMaintenance", "last_maintenance"],
            "flightNumber" => &["flightNumber", "flight_number"],
            "schedDep" => &["schedDep", "sched_dep"],
            "schedArr" => &["schedArr", "sched_arr"],
            _ => std::slice::from_ref(&key),
        };

        aliases.iter().find_map(|alias| {
            row.get(*alias)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
        })
    }

    fn parse_small_count(
        &self,
        row: &RawRecord,
        key: &str,
        row_number: usize,
    ) -> ImportResult<u32> {
        let value = self.parse_count(row, key, row_number)?;
        u32::try_from(value).map_err(|_| ImportError::TypeConversionError {
            row: row_number,
            field: key.to_string(),
            message: format!("数值超出范围: {}", value),
        })
    }

    /// 解析非负整数 (缺失为 0; 接受 "12.0" 这类整数值浮点文本)
    fn parse_count(&self, row: &RawRecord, key: &str, row_number: usize) -> ImportResult<u64> {
        let raw = match self.get_string(row, key) {
            Some(v) => v,
            None => return Ok(0),
        };

        if let Ok(value) = raw.parse::<u64>() {
            return Ok(value);
        }

        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => {
                Ok(value as u64)
            }
            _ => Err(ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("期望非负整数, 实际 {}", raw),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
    }

    #[test]
    fn test_map_aircraft_camel_case() {
        let record = row(&[
            ("tailNumber", "B-1001"),
            ("type", "A320-200"),
            ("ageYears", "12"),
            ("cycles", "30000"),
            ("lastMaintenance", "2025-01-10"),
            ("snagCount", "2"),
        ]);

        let aircraft = RecordMapper.map_aircraft(&record, 1).unwrap();
        assert_eq!(aircraft.tail_number, "B-1001");
        assert_eq!(aircraft.aircraft_type, "A320-200");
        assert_eq!(aircraft.age_years, 12);
        assert_eq!(aircraft.cycles, 30000);
        assert_eq!(aircraft.snag_count, 2);
        assert_eq!(aircraft.last_maintenance.as_deref(), Some("2025-01-10"));
    }

    #[test]
    fn test_map_aircraft_snake_case_and_missing() {
        let record = row(&[
            ("tail_number", "B-1002"),
            ("age_years", "4.0"),
            ("last_maintenance", ""),
        ]);

        let aircraft = RecordMapper.map_aircraft(&record, 1).unwrap();
        assert_eq!(aircraft.tail_number, "B-1002");
        assert_eq!(aircraft.age_years, 4);
        assert_eq!(aircraft.cycles, 0);
        assert_eq!(aircraft.snag_count, 0);
        assert!(aircraft.last_maintenance.is_none());
    }

    #[test]
    fn test_map_aircraft_bad_number_reports_row() {
        let record = row(&[("tailNumber", "B-1003"), ("cycles", "many")]);

        let err = RecordMapper.map_aircraft(&record, 7).unwrap_err();
        match err {
            ImportError::TypeConversionError { row, field, .. } => {
                assert_eq!(row, 7);
                assert_eq!(field, "cycles");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_map_leg_defaults() {
        let record = row(&[("id", "L1"), ("origin", "PEK"), ("status", "delayed")]);

        let leg = RecordMapper.map_leg(&record);
        assert_eq!(leg.id, "L1");
        assert_eq!(leg.destination, "");
        assert_eq!(leg.sched_dep, "00:00");
        assert_eq!(leg.sched_arr, "00:00");
        assert_eq!(leg.status, LegStatus::Delayed);
    }

    #[test]
    fn test_map_leg_tolerates_any_text() {
        let record = row(&[
            ("id", "L9"),
            ("schedDep", "soon"),
            ("schedArr", "25:99:00"),
            ("status", "DIVERTED"),
        ]);

        let leg = RecordMapper.map_leg(&record);
        assert_eq!(leg.sched_dep, "soon");
        assert_eq!(leg.sched_arr, "25:99:00");
        assert_eq!(leg.status, LegStatus::OnTime);
    }

    #[test]
    fn test_map_legs_keeps_order() {
        let rows = vec![
            row(&[("id", "L2"), ("sched_dep", "12:00")]),
            row(&[("id", "L1"), ("schedDep", "08:00")]),
        ];

        let legs = RecordMapper.map_legs(&rows);
        assert_eq!(legs[0].id, "L2");
        assert_eq!(legs[0].sched_dep, "12:00");
        assert_eq!(legs[1].sched_dep, "08:00");
    }
}

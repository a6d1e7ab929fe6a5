// ==========================================
// 机尾调换优化系统 - 航段轮转领域模型
// ==========================================
// 职责: 航段 / 冲突 / 轮转校验结果
// 说明: 轮转顺序由计划起飞时刻排序得出,不依赖输入顺序
// ==========================================

use crate::domain::types::{ConflictSeverity, ConflictType, LegStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// FlightLeg - 航段
// ==========================================
// 时刻为当日分钟偏移的 "HH:MM" 字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightLeg {
    pub id: String, // 航段ID (轮转内唯一)
    pub flight_number: String, // 航班号
    pub origin: String, // 起飞航站
    pub destination: String, // 到达航站
    pub sched_dep: String, // 计划起飞 (HH:MM)
    pub sched_arr: String, // 计划到达 (HH:MM)
    pub status: LegStatus, // 航段状态 (仅透传)
}

impl Default for FlightLeg {
    fn default() -> Self {
        Self {
            id: String::new(),
            flight_number: String::new(),
            origin: String::new(),
            destination: String::new(),
            sched_dep: "00:00".to_string(),
            sched_arr: "00:00".to_string(),
            status: LegStatus::OnTime,
        }
    }
}

impl FlightLeg {
    /// 构造航段 (状态默认 ON_TIME)
    pub fn new(
        id: impl Into<String>,
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        sched_dep: impl Into<String>,
        sched_arr: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            sched_dep: sched_dep.into(),
            sched_arr: sched_arr.into(),
            status: LegStatus::OnTime,
        }
    }

    /// 设置航段状态
    pub fn with_status(mut self, status: LegStatus) -> Self {
        self.status = status;
        self
    }
}

// ==========================================
// Conflict - 轮转冲突
// ==========================================
// 每次校验重新生成,不持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub leg_id: String, // 冲突归属航段 (相邻对中的后一段)
    pub reason: String, // 可读原因
    pub severity: ConflictSeverity, // 级别
    pub conflict_type: ConflictType, // 冲突类型
}

impl Conflict {
    /// 按冲突类型构造 (级别由类型决定)
    pub fn new(leg_id: impl Into<String>, conflict_type: ConflictType, reason: String) -> Self {
        Self {
            leg_id: leg_id.into(),
            reason,
            severity: conflict_type.severity(),
            conflict_type,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == ConflictSeverity::Error
    }
}

// ==========================================
// RotationValidation - 轮转校验结果
// ==========================================
// 红线: is_valid 只看冲突是否为空, WARNING 同样置 false
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationValidation {
    pub is_valid: bool,
    pub conflicts: Vec<Conflict>,
}

impl RotationValidation {
    /// 由冲突列表构造结果
    pub fn from_conflicts(conflicts: Vec<Conflict>) -> Self {
        Self {
            is_valid: conflicts.is_empty(),
            conflicts,
        }
    }

    /// 是否存在阻断级冲突
    pub fn has_errors(&self) -> bool {
        self.conflicts.iter().any(Conflict::is_blocking)
    }

    pub fn error_count(&self) -> usize {
        self.conflicts.iter().filter(|c| c.is_blocking()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.conflicts.len() - self.error_count()
    }
}

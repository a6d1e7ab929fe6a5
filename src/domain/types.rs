// ==========================================
// 机尾调换优化系统 - 领域类型定义
// ==========================================
// 职责: 航段状态 / 冲突级别 / 冲突类型 / 调机决策
// 序列化格式: SCREAMING_SNAKE_CASE (与上游接口一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 航段状态 (Leg Status)
// ==========================================
// 仅透传,校验逻辑不读取
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegStatus {
    #[default]
    OnTime, // 准点
    Delayed, // 延误
    Cancelled, // 取消
}

impl fmt::Display for LegStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegStatus::OnTime => write!(f, "ON_TIME"),
            LegStatus::Delayed => write!(f, "DELAYED"),
            LegStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl LegStatus {
    /// 从字符串解析状态 (无法识别时回落为 ON_TIME)
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "DELAYED" => LegStatus::Delayed,
            "CANCELLED" => LegStatus::Cancelled,
            _ => LegStatus::OnTime,
        }
    }
}

// ==========================================
// 冲突级别 (Conflict Severity)
// ==========================================
// 顺序: Warning < Error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictSeverity {
    Warning, // 可恢复
    Error, // 阻断
}

impl fmt::Display for ConflictSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictSeverity::Warning => write!(f, "WARNING"),
            ConflictSeverity::Error => write!(f, "ERROR"),
        }
    }
}

// ==========================================
// 冲突类型 (Conflict Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictType {
    StationMismatch, // 航站不衔接
    ScheduleOverlap, // 时刻重叠 / 负过站
    MctViolation, // 过站时间不足
}

impl ConflictType {
    /// 冲突类型对应的固定级别
    pub fn severity(&self) -> ConflictSeverity {
        match self {
            ConflictType::StationMismatch | ConflictType::ScheduleOverlap => {
                ConflictSeverity::Error
            }
            ConflictType::MctViolation => ConflictSeverity::Warning,
        }
    }
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictType::StationMismatch => write!(f, "STATION_MISMATCH"),
            ConflictType::ScheduleOverlap => write!(f, "SCHEDULE_OVERLAP"),
            ConflictType::MctViolation => write!(f, "MCT_VIOLATION"),
        }
    }
}

// ==========================================
// 调机决策 (Swap Decision)
// ==========================================
// 判定优先级: NotFeasible > StrongSwap > MarginalSwap > KeepCurrent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapDecision {
    NotFeasible, // 轮转冲突,不可调
    StrongSwap, // 强烈建议调换
    MarginalSwap, // 收益有限,酌情调换
    KeepCurrent, // 维持现状
}

impl SwapDecision {
    /// 决策对应的建议文案
    pub fn message(&self) -> &'static str {
        match self {
            SwapDecision::NotFeasible => "Swap not feasible due to rotation conflicts.",
            SwapDecision::StrongSwap => {
                "STRONG RECOMMENDATION: Swap tails to mitigate maintenance risk on tight rotation."
            }
            SwapDecision::MarginalSwap => "Marginal benefit. Swap at discretion.",
            SwapDecision::KeepCurrent => "Keep current assignment.",
        }
    }
}

impl fmt::Display for SwapDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapDecision::NotFeasible => write!(f, "NOT_FEASIBLE"),
            SwapDecision::StrongSwap => write!(f, "STRONG_SWAP"),
            SwapDecision::MarginalSwap => write!(f, "MARGINAL_SWAP"),
            SwapDecision::KeepCurrent => write!(f, "KEEP_CURRENT"),
        }
    }
}

// ==========================================
// 机尾调换优化系统 - 调机方案领域模型
// ==========================================
// 职责: 单次调机评估的结果记录
// 说明: 每次优化调用构造一次,直接返回调用方
// ==========================================

use crate::domain::aircraft::Aircraft;
use crate::domain::rotation::Conflict;
use crate::domain::types::SwapDecision;
use serde::{Deserialize, Serialize};

// ==========================================
// SwapScenario - 调机方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapScenario {
    // ===== 原始飞机 (不做修改) =====
    pub aircraft_a: Aircraft,
    pub aircraft_b: Aircraft,

    // ===== 风险 =====
    pub base_risk_a: f64, // 调换前风险
    pub base_risk_b: f64,
    pub risk_score_a: f64, // 调换后风险估计
    pub risk_score_b: f64,

    /// 风险改善量 ((调换前总风险 - 调换后总风险) * 100)
    pub improvement: f64,

    // ===== 可行性 =====
    pub feasible: bool,
    pub conflicts_a: Vec<Conflict>, // A 执飞 B 的轮转时的冲突
    pub conflicts_b: Vec<Conflict>, // B 执飞 A 的轮转时的冲突

    // ===== 建议 =====
    pub decision: SwapDecision,
    pub recommendation: String,
}

impl SwapScenario {
    /// 调换后总风险
    pub fn total_new_risk(&self) -> f64 {
        self.risk_score_a + self.risk_score_b
    }

    /// 调换前总风险
    pub fn total_base_risk(&self) -> f64 {
        self.base_risk_a + self.base_risk_b
    }
}

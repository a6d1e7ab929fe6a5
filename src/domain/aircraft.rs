// ==========================================
// 机尾调换优化系统 - 飞机领域模型
// ==========================================
// 职责: 飞机主数据 + 维修风险附加记录
// 红线: 引擎不回写 Aircraft, 风险分只挂在副本上
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Aircraft - 飞机主数据
// ==========================================
// 缺失字段按 0 / 空处理,不阻断计算
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Aircraft {
    pub tail_number: String, // 机尾号 (唯一)

    #[serde(rename = "type")]
    pub aircraft_type: String, // 机型

    pub age_years: u32, // 机龄 (年)
    pub cycles: u64, // 累计起落循环
    pub snag_count: u32, // 未关闭故障数

    /// 上次维修日期 (ISO 格式,可缺失/非法)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<String>,
}

impl Aircraft {
    /// 构造飞机记录
    pub fn new(
        tail_number: impl Into<String>,
        aircraft_type: impl Into<String>,
        age_years: u32,
        cycles: u64,
        last_maintenance: Option<&str>,
        snag_count: u32,
    ) -> Self {
        Self {
            tail_number: tail_number.into(),
            aircraft_type: aircraft_type.into(),
            age_years,
            cycles,
            snag_count,
            last_maintenance: last_maintenance.map(|s| s.to_string()),
        }
    }
}

// ==========================================
// AircraftRisk - 带风险分的飞机记录
// ==========================================
// 序列化时与 Aircraft 字段平铺,附加 riskScore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftRisk {
    #[serde(flatten)]
    pub aircraft: Aircraft,

    /// 维修风险分 [0, 1]
    pub risk_score: f64,
}

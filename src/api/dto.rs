// ==========================================
// 机尾调换优化系统 - PlanningApi DTO 定义
// ==========================================
// 职责: 定义 PlanningApi 的请求和响应结构
// 序列化格式: camelCase (与上游 HTTP 接口一致)
// ==========================================

use crate::domain::aircraft::{Aircraft, AircraftRisk};
use crate::domain::rotation::{FlightLeg, RotationValidation};
use serde::{Deserialize, Serialize};

// ==========================================
// 单机维修风险
// ==========================================

/// 请求: 单机维修风险
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenanceRiskRequest {
    pub age_years: u32,
    pub cycles: u64,

    /// 上次维修日期（可选，ISO DATE: YYYY-MM-DD）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<String>,

    pub snag_count: u32,
}

impl From<&Aircraft> for MaintenanceRiskRequest {
    fn from(aircraft: &Aircraft) -> Self {
        Self {
            age_years: aircraft.age_years,
            cycles: aircraft.cycles,
            last_maintenance: aircraft.last_maintenance.clone(),
            snag_count: aircraft.snag_count,
        }
    }
}

/// 响应: 单机维修风险
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRiskResponse {
    pub risk_score: f64,
}

// ==========================================
// 机队维修风险
// ==========================================

/// 请求: 机队维修风险
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FleetRiskRequest {
    pub fleet: Vec<Aircraft>,
}

/// 响应: 机队维修风险（顺序与请求一致）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetRiskResponse {
    pub fleet: Vec<AircraftRisk>,
}

// ==========================================
// 轮转校验
// ==========================================

/// 请求: 轮转校验
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RotationValidationRequest {
    pub legs: Vec<FlightLeg>,
}

/// 响应: 轮转校验 (isValid + conflicts)
pub type RotationValidationResponse = RotationValidation;

// ==========================================
// 调机评估
// ==========================================

/// 请求: 调机评估
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TailSwapRequest {
    pub aircraft_a: Aircraft,
    pub legs_a: Vec<FlightLeg>,
    pub aircraft_b: Aircraft,
    pub legs_b: Vec<FlightLeg>,
}

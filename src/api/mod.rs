// ==========================================
// 机尾调换优化系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令行与上层服务调用
// ==========================================

pub mod dto;
pub mod error;
pub mod planning_api;

// 重导出核心类型
pub use dto::{
    FleetRiskRequest, FleetRiskResponse, MaintenanceRiskRequest, MaintenanceRiskResponse,
    RotationValidationRequest, RotationValidationResponse, TailSwapRequest,
};
pub use error::{ApiError, ApiResult};
pub use planning_api::PlanningApi;

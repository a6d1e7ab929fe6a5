// ==========================================
// 机尾调换优化系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含引擎逻辑,不含文件读写
// ==========================================

pub mod aircraft;
pub mod rotation;
pub mod swap;
pub mod types;

// 重导出核心类型
pub use aircraft::{Aircraft, AircraftRisk};
pub use rotation::{Conflict, FlightLeg, RotationValidation};
pub use swap::SwapScenario;
pub use types::{ConflictSeverity, ConflictType, LegStatus, SwapDecision};

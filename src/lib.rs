// ==========================================
// 机尾调换优化系统 - 核心库
// ==========================================
// 职责: 维修风险评分 + 轮转校验 + 两机调换评估
// 系统定位: 决策支持 (调机由签派人员最终确认)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 启发式常量
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 命令行
pub mod cli;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ConflictSeverity, ConflictType, LegStatus, SwapDecision};

// 领域实体
pub use domain::{Aircraft, AircraftRisk, Conflict, FlightLeg, RotationValidation, SwapScenario};

// 配置
pub use config::{ConfigManager, EngineConfig};

// 引擎
pub use engine::{
    Clock, FixedClock, MaintenanceRiskEngine, RotationValidator, SystemClock, TailSwapOptimizer,
};

// API
pub use api::{ApiError, ApiResult, PlanningApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "机尾调换优化系统";

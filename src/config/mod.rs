// ==========================================
// 机尾调换优化系统 - 配置层
// ==========================================
// 职责: 启发式常量管理,支持 JSON 文件覆写
// 存储: JSON 文件 (不持久化运行状态)
// ==========================================

pub mod config_manager;
pub mod engine_config;
pub mod error;

// 重导出核心配置类型
pub use config_manager::{default_config_path, ConfigManager, ConfigSource, CONFIG_PATH_ENV};
pub use engine_config::{EngineConfig, MaintenanceRiskWeights, RotationRules, SwapHeuristic};
pub use error::{ConfigError, ConfigResult};

// ==========================================
// 机尾调换优化系统 - 引擎层
// ==========================================
// 职责: 维修风险评分 / 轮转校验 / 调机评估
// 红线: 引擎为纯计算,不读写文件,不持有可变共享状态
// 红线: 所有冲突与建议必须输出 reason
// ==========================================

pub mod clock;
pub mod maintenance_date;
pub mod maintenance_risk;
pub mod rotation;
pub mod tail_swap;

// 重导出核心引擎
pub use clock::{Clock, FixedClock, SystemClock};
pub use maintenance_date::parse_maintenance_date;
pub use maintenance_risk::MaintenanceRiskEngine;
pub use rotation::{parse_minute_of_day, RotationValidator};
pub use tail_swap::TailSwapOptimizer;

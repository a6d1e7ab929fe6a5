// ==========================================
// 机尾调换优化系统 - 导入层
// ==========================================
// 职责: 外部文件 → 领域记录 (Aircraft / FlightLeg)
// 支持: JSON, CSV
// ==========================================

pub mod error;
pub mod file_parser;
pub mod loader;
pub mod record_mapper;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, FileParser, RawRecord};
pub use loader::{load_fleet, load_json, load_legs};
pub use record_mapper::RecordMapper;

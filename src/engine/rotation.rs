// ==========================================
// 机尾调换优化系统 - 航段轮转校验引擎
// ==========================================
// 职责: 单机轮转可行性校验
// 输入: 航段列表 (任意顺序)
// 输出: is_valid + 冲突列表 (航站衔接 / 时刻重叠 / 过站时间)
// ==========================================
// 红线: 永不失败. 非法时刻按 0 分钟处理
// ==========================================

mod core;
mod time;


pub use self::core::RotationValidator;
pub use time::parse_minute_of_day;

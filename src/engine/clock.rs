// ==========================================
// 机尾调换优化系统 - 时钟抽象
// ==========================================
// 职责: 为维修超期判断提供可注入的 "当前时间"
// 生产: SystemClock (本地时间)  测试: FixedClock
// ==========================================

use chrono::{Local, NaiveDate, NaiveDateTime};

/// 当前时间提供者
///
/// 返回 `None` 表示时钟不可用,调用方按 "超期未知" 处理
pub trait Clock: Send + Sync {
    fn now(&self) -> Option<NaiveDateTime>;
}

/// 系统时钟（本地时间,不带时区）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Option<NaiveDateTime> {
        Some(Local::now().naive_local())
    }
}

/// 固定时钟
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: Option<NaiveDateTime>,
}

impl FixedClock {
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now: Some(now) }
    }

    /// 固定在某日 00:00
    pub fn on_date(date: NaiveDate) -> Self {
        Self {
            now: date.and_hms_opt(0, 0, 0),
        }
    }

    /// 模拟时钟不可用
    pub fn unavailable() -> Self {
        Self { now: None }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Option<NaiveDateTime> {
        self.now
    }
}

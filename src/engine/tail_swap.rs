// ==========================================
// 机尾调换优化系统 - 调机优化引擎
// ==========================================
// 职责: 两机轮转互换的风险/可行性评估
// 输入: 飞机 A + A 的轮转, 飞机 B + B 的轮转
// 输出: SwapScenario (调整后风险 + 改善量 + 可行性 + 建议)
// ==========================================
// 注: 仅评估给定的一对,不做全机队搜索
// ==========================================

mod core;


pub use self::core::{adjust_for_load, decide, TailSwapOptimizer};

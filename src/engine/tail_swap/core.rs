// ==========================================
// 机尾调换优化系统 - 调机优化引擎
// ==========================================
// 流程:
// 1) 两机基线维修风险
// 2) 交叉校验: A 执飞 B 的轮转, B 执飞 A 的轮转
// 3) 负荷对比启发式估算调换后风险
// 4) 改善量 = (调换前总风险 - 调换后总风险) * 100
// 5) 按可行性 > 改善阈值 生成建议
// ==========================================

use crate::config::engine_config::{EngineConfig, SwapHeuristic};
use crate::domain::aircraft::Aircraft;
use crate::domain::rotation::FlightLeg;
use crate::domain::swap::SwapScenario;
use crate::domain::types::SwapDecision;
use crate::engine::clock::Clock;
use crate::engine::maintenance_risk::MaintenanceRiskEngine;
use crate::engine::rotation::RotationValidator;
use std::sync::Arc;
use tracing::{debug, info};

// ==========================================
// TailSwapOptimizer - 调机优化引擎
// ==========================================
#[derive(Clone, Default)]
pub struct TailSwapOptimizer {
    risk_engine: MaintenanceRiskEngine,
    validator: RotationValidator,
    heuristic: SwapHeuristic,
}

impl TailSwapOptimizer {
    /// 由已构造的子引擎组装
    pub fn new(
        risk_engine: MaintenanceRiskEngine,
        validator: RotationValidator,
        heuristic: SwapHeuristic,
    ) -> Self {
        Self {
            risk_engine,
            validator,
            heuristic,
        }
    }

    /// 由引擎配置 + 时钟构造
    pub fn from_config(config: &EngineConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            MaintenanceRiskEngine::new(config.maintenance.clone(), clock),
            RotationValidator::new(config.rotation.clone()),
            config.swap.clone(),
        )
    }

    pub fn risk_engine(&self) -> &MaintenanceRiskEngine {
        &self.risk_engine
    }

    pub fn validator(&self) -> &RotationValidator {
        &self.validator
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估两机轮转互换
    ///
    /// # 参数
    /// - `aircraft_a` / `legs_a`: 飞机 A 及其当前轮转
    /// - `aircraft_b` / `legs_b`: 飞机 B 及其当前轮转
    ///
    /// # 返回
    /// SwapScenario (原始飞机记录原样带回)
    pub fn optimize(
        &self,
        aircraft_a: &Aircraft,
        legs_a: &[FlightLeg],
        aircraft_b: &Aircraft,
        legs_b: &[FlightLeg],
    ) -> SwapScenario {
        // 1. 基线风险
        let base_risk_a = self.risk_engine.score_aircraft(aircraft_a);
        let base_risk_b = self.risk_engine.score_aircraft(aircraft_b);
        let total_base_risk = base_risk_a + base_risk_b;

        // 2. 交叉校验 (校验的是调换后的搭配,不是当前搭配)
        let a_on_b = self.validator.validate(legs_b);
        let b_on_a = self.validator.validate(legs_a);
        let feasible = a_on_b.is_valid && b_on_a.is_valid;

        // 3. 负荷启发式
        let (new_risk_a, new_risk_b) = adjust_for_load(
            base_risk_a,
            legs_a.len(),
            base_risk_b,
            legs_b.len(),
            &self.heuristic,
        );

        // 4. 改善量 (基于截断后的风险)
        let improvement = (total_base_risk - (new_risk_a + new_risk_b)) * 100.0;

        // 5. 建议
        let decision = decide(feasible, improvement, &self.heuristic);

        debug!(
            conflicts_a = a_on_b.conflicts.len(),
            conflicts_b = b_on_a.conflicts.len(),
            "交叉校验完成"
        );
        info!(
            tail_a = %aircraft_a.tail_number,
            tail_b = %aircraft_b.tail_number,
            base_risk_a,
            base_risk_b,
            new_risk_a,
            new_risk_b,
            improvement,
            feasible,
            decision = %decision,
            "调机评估完成"
        );

        SwapScenario {
            aircraft_a: aircraft_a.clone(),
            aircraft_b: aircraft_b.clone(),
            base_risk_a,
            base_risk_b,
            risk_score_a: new_risk_a,
            risk_score_b: new_risk_b,
            improvement,
            feasible,
            conflicts_a: a_on_b.conflicts,
            conflicts_b: b_on_a.conflicts,
            decision,
            recommendation: decision.message().to_string(),
        }
    }
}

/// 负荷对比启发式
///
/// 规则:
/// - 风险高的飞机正在执飞更重的轮转 → 调换后该机 * relief_factor,
///   另一机 * burden_factor
/// - 风险相等或负荷相等 → 不调整
///
/// 结果截断到 [0, 1]. SwapScenario 中的改善量基于截断后的风险计算
///
/// # 返回
/// (调换后 A 的风险, 调换后 B 的风险)
pub fn adjust_for_load(
    risk_a: f64,
    load_a: usize,
    risk_b: f64,
    load_b: usize,
    heuristic: &SwapHeuristic,
) -> (f64, f64) {
    let (new_a, new_b) = if risk_a > risk_b && load_a > load_b {
        (
            risk_a * heuristic.relief_factor,
            risk_b * heuristic.burden_factor,
        )
    } else if risk_b > risk_a && load_b > load_a {
        (
            risk_a * heuristic.burden_factor,
            risk_b * heuristic.relief_factor,
        )
    } else {
        (risk_a, risk_b)
    };

    (new_a.clamp(0.0, 1.0), new_b.clamp(0.0, 1.0))
}

/// 生成调机决策
///
/// 判定顺序: 不可行 > 强烈建议 (> strong_threshold)
/// > 酌情 (> marginal_threshold) > 维持
pub fn decide(feasible: bool, improvement: f64, heuristic: &SwapHeuristic) -> SwapDecision {
    if !feasible {
        SwapDecision::NotFeasible
    } else if improvement > heuristic.strong_threshold {
        SwapDecision::StrongSwap
    } else if improvement > heuristic.marginal_threshold {
        SwapDecision::MarginalSwap
    } else {
        SwapDecision::KeepCurrent
    }
}

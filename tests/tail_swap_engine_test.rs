// ==========================================
// TailSwapOptimizer 引擎集成测试
// ==========================================
// 测试目标: 验证调机评估全流程
// 流程: 风险 → 交叉校验 → 负荷启发式 → 建议
// 覆盖范围: 超期维修驱动的调换、配置阈值、不可行、输出格式
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use tail_swap_optimizer::config::{ConfigManager, EngineConfig, SwapHeuristic};
use tail_swap_optimizer::domain::types::{ConflictType, SwapDecision};
use tail_swap_optimizer::domain::{Aircraft, FlightLeg};
use tail_swap_optimizer::engine::{FixedClock, TailSwapOptimizer};

// ==========================================
// 测试辅助函数
// ==========================================

fn create_optimizer(config: &EngineConfig) -> TailSwapOptimizer {
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    TailSwapOptimizer::from_config(config, Arc::new(FixedClock::on_date(today)))
}

fn leg(id: &str, origin: &str, dest: &str, dep: &str, arr: &str) -> FlightLeg {
    FlightLeg::new(id, format!("CZ{}", id), origin, dest, dep, arr)
}

/// 风险 0.70: 0.05 + 0.18 + 0.24 + 0.08 + 超期 0.15
fn create_overdue_aircraft() -> Aircraft {
    Aircraft::new("B-30A1", "A321-200", 12, 24_000, Some("2025-01-01"), 1)
}

/// 风险 0.155: 0.05 + 0.045 + 0.06
fn create_fresh_aircraft() -> Aircraft {
    Aircraft::new("B-30A2", "A321-200", 3, 6_000, Some("2025-02-20"), 0)
}

/// 三段轮转 CAN → PEK → SHA → CAN
fn create_busy_rotation() -> Vec<FlightLeg> {
    vec![
        leg("3101", "CAN", "PEK", "07:00", "10:10"),
        leg("3102", "PEK", "SHA", "11:10", "13:20"),
        leg("3103", "SHA", "CAN", "14:20", "16:40"),
    ]
}

/// 两段轮转 CAN → CTU → CAN
fn create_quiet_rotation() -> Vec<FlightLeg> {
    vec![
        leg("3201", "CAN", "CTU", "09:00", "11:20"),
        leg("3202", "CTU", "CAN", "13:00", "15:20"),
    ]
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ==========================================
// 测试用例
// ==========================================

#[test]
fn test_overdue_aircraft_on_busy_rotation_is_swapped() {
    let optimizer = create_optimizer(&EngineConfig::default());

    let scenario = optimizer.optimize(
        &create_overdue_aircraft(),
        &create_busy_rotation(),
        &create_fresh_aircraft(),
        &create_quiet_rotation(),
    );

    assert_close(scenario.base_risk_a, 0.70);
    assert_close(scenario.base_risk_b, 0.155);
    assert_close(scenario.risk_score_a, 0.56);
    assert_close(scenario.risk_score_b, 0.1705);
    assert_close(scenario.improvement, 12.45);
    assert!(scenario.feasible);
    assert!(scenario.conflicts_a.is_empty());
    assert!(scenario.conflicts_b.is_empty());
    assert_eq!(scenario.decision, SwapDecision::StrongSwap);
    assert_eq!(
        scenario.recommendation,
        "STRONG RECOMMENDATION: Swap tails to mitigate maintenance risk on tight rotation."
    );
    assert_close(
        scenario.total_base_risk() - scenario.total_new_risk(),
        scenario.improvement / 100.0,
    );
}

#[test]
fn test_configured_threshold_downgrades_to_marginal() {
    let config = EngineConfig {
        swap: SwapHeuristic {
            strong_threshold: 20.0,
            ..SwapHeuristic::default()
        },
        ..EngineConfig::default()
    };
    let manager = ConfigManager::from_config(config).unwrap();
    let optimizer = create_optimizer(manager.config());

    let scenario = optimizer.optimize(
        &create_overdue_aircraft(),
        &create_busy_rotation(),
        &create_fresh_aircraft(),
        &create_quiet_rotation(),
    );

    assert_close(scenario.improvement, 12.45);
    assert_eq!(scenario.decision, SwapDecision::MarginalSwap);
}

#[test]
fn test_cross_rotation_conflicts_block_swap() {
    let optimizer = create_optimizer(&EngineConfig::default());
    let broken_rotation = vec![
        leg("3301", "CAN", "CTU", "09:00", "11:20"),
        leg("3302", "KMG", "CAN", "10:50", "13:00"),
    ];

    let scenario = optimizer.optimize(
        &create_overdue_aircraft(),
        &create_busy_rotation(),
        &create_fresh_aircraft(),
        &broken_rotation,
    );

    assert!(!scenario.feasible);
    assert_eq!(scenario.decision, SwapDecision::NotFeasible);
    assert_eq!(
        scenario.recommendation,
        "Swap not feasible due to rotation conflicts."
    );

    // A 执飞 B 的轮转: 航站不衔接 + 时刻重叠
    let types: Vec<ConflictType> = scenario.conflicts_a.iter().map(|c| c.conflict_type).collect();
    assert_eq!(
        types,
        vec![ConflictType::StationMismatch, ConflictType::ScheduleOverlap]
    );
    assert!(scenario.conflicts_b.is_empty());
}

#[test]
fn test_scenario_serializes_with_camel_case_keys() {
    let optimizer = create_optimizer(&EngineConfig::default());
    let scenario = optimizer.optimize(
        &create_overdue_aircraft(),
        &create_busy_rotation(),
        &create_fresh_aircraft(),
        &create_quiet_rotation(),
    );

    let value = serde_json::to_value(&scenario).unwrap();
    assert_eq!(value["aircraftA"]["tailNumber"], "B-30A1");
    assert_eq!(value["aircraftB"]["type"], "A321-200");
    assert_eq!(value["feasible"], true);
    assert_eq!(value["decision"], "STRONG_SWAP");
    assert!(value["riskScoreA"].is_number());
    assert!(value["riskScoreB"].is_number());
    assert!(value["improvement"].is_number());
    assert!(value["conflictsA"].as_array().unwrap().is_empty());
    assert!(value["recommendation"].is_string());
}

// ==========================================
// 机尾调换优化系统 - 维修风险评分引擎
// ==========================================
// 职责: 飞机属性 → [0, 1] 维修风险分
// 输入: 机龄 + 起落循环 + 上次维修日期 + 未关闭故障数
// 输出: 风险分 (加法启发式,最终截断到 [0, 1])
// ==========================================
// 红线: 永不失败. 日期缺失/非法或时钟不可用时,超期项直接省略
// ==========================================

use crate::config::engine_config::MaintenanceRiskWeights;
use crate::domain::aircraft::{Aircraft, AircraftRisk};
use crate::engine::clock::{Clock, SystemClock};
use crate::engine::maintenance_date::parse_maintenance_date;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

// ==========================================
// MaintenanceRiskEngine - 维修风险评分引擎
// ==========================================
#[derive(Clone)]
pub struct MaintenanceRiskEngine {
    weights: MaintenanceRiskWeights,
    clock: Arc<dyn Clock>,
}

impl Default for MaintenanceRiskEngine {
    fn default() -> Self {
        Self::new(MaintenanceRiskWeights::default(), Arc::new(SystemClock))
    }
}

impl MaintenanceRiskEngine {
    /// 构造函数
    ///
    /// # 参数
    /// - `weights`: 评分权重
    /// - `clock`: 当前时间提供者 (测试时注入 FixedClock)
    pub fn new(weights: MaintenanceRiskWeights, clock: Arc<dyn Clock>) -> Self {
        Self { weights, clock }
    }

    pub fn weights(&self) -> &MaintenanceRiskWeights {
        &self.weights
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算单机维修风险分
    ///
    /// 规则 (可解释):
    /// - 基础风险 base_risk
    /// - + 机龄 * age_weight
    /// - + (循环 / cycles_normalizer) * cycles_weight
    /// - + 故障数 * snag_weight
    /// - + overdue_penalty (上次维修距今 > overdue_after_days 天)
    ///
    /// # 参数
    /// - `age_years`: 机龄 (年)
    /// - `cycles`: 累计起落循环
    /// - `last_maintenance`: 上次维修日期 (ISO 格式,可缺失)
    /// - `snag_count`: 未关闭故障数
    ///
    /// # 返回
    /// 风险分 [0.0, 1.0]
    pub fn score(
        &self,
        age_years: u32,
        cycles: u64,
        last_maintenance: Option<&str>,
        snag_count: u32,
    ) -> f64 {
        let w = &self.weights;

        let mut risk = w.base_risk;
        risk += age_years as f64 * w.age_weight;
        risk += (cycles as f64 / w.cycles_normalizer) * w.cycles_weight;
        risk += snag_count as f64 * w.snag_weight;
        risk += self.overdue_term(last_maintenance);

        risk.clamp(0.0, 1.0)
    }

    /// 计算飞机记录的维修风险分
    pub fn score_aircraft(&self, aircraft: &Aircraft) -> f64 {
        self.score(
            aircraft.age_years,
            aircraft.cycles,
            aircraft.last_maintenance.as_deref(),
            aircraft.snag_count,
        )
    }

    /// 批量计算机队风险 (保持输入顺序)
    ///
    /// 返回的是副本,原始 Aircraft 不做修改
    pub fn score_fleet(&self, fleet: &[Aircraft]) -> Vec<AircraftRisk> {
        fleet.iter().map(|aircraft| self.attach_score(aircraft)).collect()
    }

    /// 并行批量计算机队风险
    ///
    /// 各飞机之间无依赖,结果与 `score_fleet` 完全一致 (顺序同样保持)
    pub fn score_fleet_parallel(&self, fleet: &[Aircraft]) -> Vec<AircraftRisk> {
        fleet
            .par_iter()
            .map(|aircraft| self.attach_score(aircraft))
            .collect()
    }

    // ==========================================
    // 内部计算
    // ==========================================

    fn attach_score(&self, aircraft: &Aircraft) -> AircraftRisk {
        AircraftRisk {
            aircraft: aircraft.clone(),
            risk_score: self.score_aircraft(aircraft),
        }
    }

    /// 维修超期附加项
    ///
    /// 日期缺失 / 无法解析 / 时钟不可用 → 0.0 (不视为最大超期)
    fn overdue_term(&self, last_maintenance: Option<&str>) -> f64 {
        let raw = match last_maintenance {
            Some(raw) => raw,
            None => return 0.0,
        };

        let maintained_at = match parse_maintenance_date(raw) {
            Some(dt) => dt,
            None => {
                debug!(last_maintenance = raw, "维修日期无法解析,省略超期项");
                return 0.0;
            }
        };

        let now = match self.clock.now() {
            Some(now) => now,
            None => {
                debug!("时钟不可用,省略超期项");
                return 0.0;
            }
        };

        let days_since = (now - maintained_at).num_days();
        if days_since > self.weights.overdue_after_days {
            self.weights.overdue_penalty
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::FixedClock;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn engine_on(date: (i32, u32, u32)) -> MaintenanceRiskEngine {
        let today = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        MaintenanceRiskEngine::new(
            MaintenanceRiskWeights::default(),
            Arc::new(FixedClock::on_date(today)),
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_base_risk_only() {
        let engine = engine_on((2025, 3, 1));
        assert_close(engine.score(0, 0, None, 0), 0.05);
    }

    #[test]
    fn test_additive_terms_without_date() {
        let engine = engine_on((2025, 3, 1));
        // 0.05 + 10*0.015 + (20000/10000)*0.1 + 1*0.08
        assert_close(engine.score(10, 20_000, None, 1), 0.48);
    }

    #[test]
    fn test_overdue_penalty_applied_after_30_days() {
        let engine = engine_on((2025, 3, 1));

        // 45 天前
        assert_close(engine.score(0, 0, Some("2025-01-15"), 0), 0.20);
        // 31 天前
        assert_close(engine.score(0, 0, Some("2025-01-29"), 0), 0.20);
    }

    #[test]
    fn test_no_penalty_at_exactly_30_days() {
        let engine = engine_on((2025, 3, 1));
        assert_close(engine.score(0, 0, Some("2025-01-30"), 0), 0.05);
    }

    #[test]
    fn test_recent_and_future_dates_no_penalty() {
        let engine = engine_on((2025, 3, 1));
        assert_close(engine.score(0, 0, Some("2025-02-20"), 0), 0.05);
        assert_close(engine.score(0, 0, Some("2025-06-01"), 0), 0.05);
    }

    #[test]
    fn test_invalid_date_omits_term() {
        let engine = engine_on((2025, 3, 1));
        assert_close(engine.score(0, 0, Some("not-a-date"), 0), 0.05);
        assert_close(engine.score(0, 0, Some(""), 0), 0.05);
        assert_close(engine.score(0, 0, Some("2025-13-45"), 0), 0.05);
    }

    #[test]
    fn test_unavailable_clock_omits_term() {
        let engine = MaintenanceRiskEngine::new(
            MaintenanceRiskWeights::default(),
            Arc::new(FixedClock::unavailable()),
        );
        assert_close(engine.score(0, 0, Some("2000-01-01"), 0), 0.05);
    }

    #[test]
    fn test_datetime_form_accepted() {
        let engine = engine_on((2025, 3, 1));
        assert_close(engine.score(0, 0, Some("2025-01-01T08:30:00"), 0), 0.20);
        assert_close(engine.score(0, 0, Some("2025-01-01 08:30"), 0), 0.20);
    }

    #[test]
    fn test_clamped_to_one() {
        let engine = engine_on((2025, 3, 1));
        assert_eq!(engine.score(40, 200_000, Some("2020-01-01"), 10), 1.0);
    }

    #[test]
    fn test_score_fleet_preserves_order_and_input() {
        let engine = engine_on((2025, 3, 1));
        let fleet = vec![
            Aircraft::new("B-0001", "A320-200", 20, 40_000, Some("2024-12-01"), 3),
            Aircraft::new("B-0002", "B737-800", 2, 3_000, None, 0),
            Aircraft::new("B-0003", "A321neo", 8, 12_000, Some("bad"), 1),
        ];

        let scored = engine.score_fleet(&fleet);
        assert_eq!(scored.len(), 3);
        for (record, original) in scored.iter().zip(fleet.iter()) {
            assert_eq!(&record.aircraft, original);
            assert_close(record.risk_score, engine.score_aircraft(original));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let engine = engine_on((2025, 3, 1));
        let fleet: Vec<Aircraft> = (0..64)
            .map(|i| {
                Aircraft::new(
                    format!("B-{:04}", i),
                    "A320-200",
                    i % 25,
                    i as u64 * 1500,
                    Some("2025-01-01"),
                    i % 4,
                )
            })
            .collect();

        assert_eq!(engine.score_fleet(&fleet), engine.score_fleet_parallel(&fleet));
    }

    proptest! {
        #[test]
        fn prop_score_within_bounds(
            age in 0u32..200,
            cycles in 0u64..1_000_000,
            snags in 0u32..100,
            offset_days in -400i64..400,
        ) {
            let engine = engine_on((2025, 3, 1));
            let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
            let date = today - chrono::Duration::days(offset_days);
            let date_str = date.format("%Y-%m-%d").to_string();
            let score = engine.score(age, cycles, Some(&date_str), snags);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_monotonic_in_age(age in 0u32..200, cycles in 0u64..200_000, snags in 0u32..20) {
            let engine = engine_on((2025, 3, 1));
            let older = engine.score(age + 1, cycles, None, snags);
            prop_assert!(older >= engine.score(age, cycles, None, snags));
        }

        #[test]
        fn prop_monotonic_in_cycles(
            age in 0u32..60,
            cycles in 0u64..200_000,
            extra in 1u64..50_000,
            snags in 0u32..20,
        ) {
            let engine = engine_on((2025, 3, 1));
            let worn = engine.score(age, cycles + extra, None, snags);
            prop_assert!(worn >= engine.score(age, cycles, None, snags));
        }

        #[test]
        fn prop_monotonic_in_snags(age in 0u32..60, cycles in 0u64..200_000, snags in 0u32..20) {
            let engine = engine_on((2025, 3, 1));
            let date = Some("2024-01-01");
            let more_snags = engine.score(age, cycles, date, snags + 1);
            prop_assert!(more_snags >= engine.score(age, cycles, date, snags));
        }
    }
}

// ==========================================
// 机尾调换优化系统 - 航段轮转校验引擎
// ==========================================
// 校验规则 (相邻航段对,三项独立判定):
// 1) 航站衔接: 前段到达站 != 后段起飞站 → ERROR
// 2) 时刻重叠: 前段到达 > 后段起飞 → ERROR (跳过该对的过站时间检查)
// 3) 过站时间: 后段起飞 - 前段到达 < MCT → WARNING
// 冲突统一归属到后一段航段
// ==========================================

use crate::config::engine_config::RotationRules;
use crate::domain::rotation::{Conflict, FlightLeg, RotationValidation};
use crate::domain::types::ConflictType;
use tracing::debug;

use super::time::parse_minute_of_day;

// ==========================================
// RotationValidator - 轮转校验引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct RotationValidator {
    rules: RotationRules,
}

impl RotationValidator {
    /// 创建新的轮转校验引擎
    pub fn new(rules: RotationRules) -> Self {
        Self { rules }
    }

    pub fn min_connection_minutes(&self) -> i32 {
        self.rules.min_connection_minutes
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 校验轮转可行性
    ///
    /// # 参数
    /// - `legs`: 航段列表 (不要求有序)
    ///
    /// # 返回
    /// RotationValidation: 冲突为空时 is_valid = true (WARNING 同样计入)
    pub fn validate(&self, legs: &[FlightLeg]) -> RotationValidation {
        if legs.is_empty() {
            return RotationValidation::from_conflicts(Vec::new());
        }

        let sorted = sort_by_departure(legs);
        let mut conflicts = Vec::new();

        for pair in sorted.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            self.check_pair(current, next, &mut conflicts);
        }

        debug!(
            leg_count = legs.len(),
            conflict_count = conflicts.len(),
            "轮转校验完成"
        );

        RotationValidation::from_conflicts(conflicts)
    }

    /// 校验相邻航段对
    fn check_pair(&self, current: &FlightLeg, next: &FlightLeg, conflicts: &mut Vec<Conflict>) {
        let arr_time = parse_minute_of_day(&current.sched_arr);
        let next_dep_time = parse_minute_of_day(&next.sched_dep);

        // 1. 航站衔接
        if current.destination != next.origin {
            debug!(
                leg_id = %next.id,
                arrival_station = %current.destination,
                departure_station = %next.origin,
                "航站不衔接"
            );
            conflicts.push(Conflict::new(
                next.id.as_str(),
                ConflictType::StationMismatch,
                format!(
                    "Location mismatch: Arr {} != Dep {}",
                    current.destination, next.origin
                ),
            ));
        }

        // 2. 时刻重叠 / 负过站 (命中后不再检查过站时间)
        if arr_time > next_dep_time {
            debug!(
                leg_id = %next.id,
                arrival = %current.sched_arr,
                departure = %next.sched_dep,
                "时刻重叠"
            );
            conflicts.push(Conflict::new(
                next.id.as_str(),
                ConflictType::ScheduleOverlap,
                format!(
                    "Schedule Overlap: Arrives {}, Departs {}",
                    current.sched_arr, next.sched_dep
                ),
            ));
            return;
        }

        // 3. 最短过站时间
        let turnaround = next_dep_time - arr_time;
        let mct = self.rules.min_connection_minutes;
        if turnaround < mct {
            debug!(leg_id = %next.id, turnaround, mct, "过站时间不足");
            conflicts.push(Conflict::new(
                next.id.as_str(),
                ConflictType::MctViolation,
                format!(
                    "MCT Violation: Only {} min available (Req: {})",
                    turnaround, mct
                ),
            ));
        }
    }
}

/// 按计划起飞时刻稳定排序 (起飞时刻相同保持输入顺序)
fn sort_by_departure(legs: &[FlightLeg]) -> Vec<&FlightLeg> {
    let mut keyed: Vec<(i32, &FlightLeg)> = legs
        .iter()
        .map(|leg| (parse_minute_of_day(&leg.sched_dep), leg))
        .collect();
    keyed.sort_by_key(|(dep, _)| *dep);
    keyed.into_iter().map(|(_, leg)| leg).collect()
}

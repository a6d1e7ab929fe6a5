use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// 引擎配置（启发式常量全集）
///
/// 所有字段均有默认值，配置文件只需写需要覆写的项。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 维修风险评分权重
    pub maintenance: MaintenanceRiskWeights,

    /// 轮转校验规则
    pub rotation: RotationRules,

    /// 调机启发式参数
    pub swap: SwapHeuristic,
}

/// 维修风险评分权重
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceRiskWeights {
    /// 基础风险
    pub base_risk: f64,

    /// 每年机龄增加的风险
    pub age_weight: f64,

    /// 每 `cycles_normalizer` 个循环增加的风险
    pub cycles_weight: f64,

    pub cycles_normalizer: f64,

    /// 每个未关闭故障增加的风险
    pub snag_weight: f64,

    /// 维修超期附加风险
    pub overdue_penalty: f64,

    /// 距上次维修超过多少天视为超期（严格大于）
    pub overdue_after_days: i64,
}

impl Default for MaintenanceRiskWeights {
    fn default() -> Self {
        Self {
            base_risk: 0.05,
            age_weight: 0.015,
            cycles_weight: 0.1,
            cycles_normalizer: 10_000.0,
            snag_weight: 0.08,
            overdue_penalty: 0.15,
            overdue_after_days: 30,
        }
    }
}

/// 轮转校验规则
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationRules {
    /// 最短过站时间（分钟），等于该值不告警
    pub min_connection_minutes: i32,
}

impl Default for RotationRules {
    fn default() -> Self {
        Self {
            min_connection_minutes: 45,
        }
    }
}

/// 调机启发式参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapHeuristic {
    /// 高风险飞机换到轻轮转后的风险系数
    pub relief_factor: f64,

    /// 低风险飞机换到重轮转后的风险系数
    pub burden_factor: f64,

    /// 改善量大于该值：强烈建议
    pub strong_threshold: f64,

    /// 改善量大于该值（且不超过 strong_threshold）：酌情调换
    pub marginal_threshold: f64,
}

impl Default for SwapHeuristic {
    fn default() -> Self {
        Self {
            relief_factor: 0.8,
            burden_factor: 1.1,
            strong_threshold: 5.0,
            marginal_threshold: 0.0,
        }
    }
}

impl EngineConfig {
    /// 校验配置有效性
    ///
    /// # 验证规则
    /// 1. 所有数值必须有限
    /// 2. 评分权重不能为负（保证评分对机龄/循环/故障单调不减）
    /// 3. cycles_normalizer 必须 > 0
    /// 4. relief_factor ∈ (0, 1], burden_factor >= 1
    /// 5. strong_threshold >= marginal_threshold
    /// 6. min_connection_minutes >= 0, overdue_after_days >= 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.maintenance;
        let numeric = [
            ("maintenance.base_risk", m.base_risk),
            ("maintenance.age_weight", m.age_weight),
            ("maintenance.cycles_weight", m.cycles_weight),
            ("maintenance.cycles_normalizer", m.cycles_normalizer),
            ("maintenance.snag_weight", m.snag_weight),
            ("maintenance.overdue_penalty", m.overdue_penalty),
            ("swap.relief_factor", self.swap.relief_factor),
            ("swap.burden_factor", self.swap.burden_factor),
            ("swap.strong_threshold", self.swap.strong_threshold),
            ("swap.marginal_threshold", self.swap.marginal_threshold),
        ];
        for (key, value) in numeric {
            if !value.is_finite() {
                return Err(ConfigError::invalid(key, "必须是有限数值"));
            }
        }

        let weights = [
            ("maintenance.base_risk", m.base_risk),
            ("maintenance.age_weight", m.age_weight),
            ("maintenance.cycles_weight", m.cycles_weight),
            ("maintenance.snag_weight", m.snag_weight),
            ("maintenance.overdue_penalty", m.overdue_penalty),
        ];
        for (key, value) in weights {
            if value < 0.0 {
                return Err(ConfigError::invalid(key, format!("不能为负: {}", value)));
            }
        }

        if m.cycles_normalizer <= 0.0 {
            return Err(ConfigError::invalid(
                "maintenance.cycles_normalizer",
                format!("必须大于 0: {}", m.cycles_normalizer),
            ));
        }
        if m.overdue_after_days < 0 {
            return Err(ConfigError::invalid(
                "maintenance.overdue_after_days",
                format!("不能为负: {}", m.overdue_after_days),
            ));
        }

        if self.rotation.min_connection_minutes < 0 {
            return Err(ConfigError::invalid(
                "rotation.min_connection_minutes",
                format!("不能为负: {}", self.rotation.min_connection_minutes),
            ));
        }

        let s = &self.swap;
        if s.relief_factor <= 0.0 || s.relief_factor > 1.0 {
            return Err(ConfigError::invalid(
                "swap.relief_factor",
                format!("必须在 (0, 1] 范围内: {}", s.relief_factor),
            ));
        }
        if s.burden_factor < 1.0 {
            return Err(ConfigError::invalid(
                "swap.burden_factor",
                format!("不能小于 1: {}", s.burden_factor),
            ));
        }
        if s.strong_threshold < s.marginal_threshold {
            return Err(ConfigError::invalid(
                "swap.strong_threshold",
                format!(
                    "不能小于 marginal_threshold: {} < {}",
                    s.strong_threshold, s.marginal_threshold
                ),
            ));
        }

        Ok(())
    }
}

// ==========================================
// 机尾调换优化系统 - 计划评估 API
// ==========================================
// 职责: 维修风险、轮转校验、调机评估的统一入口
// 引擎计算不失败; ApiResult 仅出现在配置加载与文件读取边界
// ==========================================

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::api::dto::{
    FleetRiskRequest, FleetRiskResponse, MaintenanceRiskRequest, MaintenanceRiskResponse,
    RotationValidationRequest, RotationValidationResponse, TailSwapRequest,
};
use crate::api::error::{ApiError, ApiResult};
use crate::config::{ConfigManager, EngineConfig};
use crate::domain::swap::SwapScenario;
use crate::engine::{Clock, SystemClock, TailSwapOptimizer};
use crate::importer;

// ==========================================
// PlanningApi
// ==========================================

/// 计划评估 API
///
/// 职责：
/// 1. 单机 / 机队维修风险
/// 2. 轮转可行性校验
/// 3. 两机调换评估
pub struct PlanningApi {
    config: ConfigManager,
    optimizer: TailSwapOptimizer,
}

impl PlanningApi {
    /// 由配置管理器 + 时钟构造
    pub fn new(config: ConfigManager, clock: Arc<dyn Clock>) -> Self {
        let optimizer = TailSwapOptimizer::from_config(config.config(), clock);
        Self { config, optimizer }
    }

    /// 内置默认配置 + 系统时钟
    pub fn with_defaults() -> Self {
        Self::new(ConfigManager::with_defaults(), Arc::new(SystemClock))
    }

    /// 按查找顺序加载配置 (显式路径 → 环境变量 → 用户目录 → 内置)
    pub fn load(config_path: Option<&Path>, clock: Arc<dyn Clock>) -> ApiResult<Self> {
        let config = ConfigManager::load(config_path)?;
        info!(source = ?config.source(), "计划评估 API 初始化");
        Ok(Self::new(config, clock))
    }

    pub fn config(&self) -> &EngineConfig {
        self.config.config()
    }

    /// 当前生效配置 (JSON 快照)
    pub fn config_snapshot(&self) -> ApiResult<String> {
        Ok(self.config.config_snapshot()?)
    }

    // ==========================================
    // 核心操作
    // ==========================================

    /// 单机维修风险
    pub fn score_maintenance_risk(
        &self,
        request: &MaintenanceRiskRequest,
    ) -> MaintenanceRiskResponse {
        let risk_score = self.optimizer.risk_engine().score(
            request.age_years,
            request.cycles,
            request.last_maintenance.as_deref(),
            request.snag_count,
        );
        MaintenanceRiskResponse { risk_score }
    }

    /// 机队维修风险
    ///
    /// # 参数
    /// - request: 机队
    /// - parallel: 是否使用并行计算 (结果与顺序计算一致)
    pub fn score_fleet_risk(
        &self,
        request: &FleetRiskRequest,
        parallel: bool,
    ) -> FleetRiskResponse {
        let engine = self.optimizer.risk_engine();
        let fleet = if parallel {
            engine.score_fleet_parallel(&request.fleet)
        } else {
            engine.score_fleet(&request.fleet)
        };

        debug!(aircraft_count = fleet.len(), parallel, "机队风险计算完成");
        FleetRiskResponse { fleet }
    }

    /// 轮转校验
    pub fn validate_rotation(
        &self,
        request: &RotationValidationRequest,
    ) -> RotationValidationResponse {
        self.optimizer.validator().validate(&request.legs)
    }

    /// 调机评估
    pub fn optimize_tail_swap(&self, request: &TailSwapRequest) -> SwapScenario {
        self.optimizer.optimize(
            &request.aircraft_a,
            &request.legs_a,
            &request.aircraft_b,
            &request.legs_b,
        )
    }

    // ==========================================
    // 文件入口
    // ==========================================

    /// 读取 JSON 请求文件
    pub fn read_request<T: DeserializeOwned>(path: &Path) -> ApiResult<T> {
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !is_json {
            return Err(ApiError::InvalidInput(format!(
                "请求文件必须为 JSON: {}",
                path.display()
            )));
        }

        Ok(importer::load_json(path)?)
    }

    /// 从机队文件 (.json / .csv) 计算风险
    pub fn score_fleet_file(&self, path: &Path, parallel: bool) -> ApiResult<FleetRiskResponse> {
        let fleet = importer::load_fleet(path)?;
        Ok(self.score_fleet_risk(&FleetRiskRequest { fleet }, parallel))
    }

    /// 从航段文件 (.json / .csv) 校验轮转
    pub fn validate_rotation_file(&self, path: &Path) -> ApiResult<RotationValidationResponse> {
        let legs = importer::load_legs(path)?;
        Ok(self.validate_rotation(&RotationValidationRequest { legs }))
    }
}

impl Default for PlanningApi {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ==========================================
// 机尾调换优化系统 - 配置管理器
// ==========================================
// 职责: 配置文件定位、加载、校验、快照
// 查找顺序: 显式路径 > 环境变量 > 用户配置目录 > 内置默认
// ==========================================

use crate::config::engine_config::EngineConfig;
use crate::config::error::{ConfigError, ConfigResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 环境变量: 显式指定配置文件路径
pub const CONFIG_PATH_ENV: &str = "TAIL_SWAP_CONFIG";

/// 用户配置目录下的子目录名
const CONFIG_DIR_NAME: &str = "tail-swap-optimizer";

/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigSource - 配置来源
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf), // 命令行/调用方指定
    Environment(PathBuf), // TAIL_SWAP_CONFIG
    UserDir(PathBuf), // 用户配置目录
    BuiltIn, // 内置默认
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: EngineConfig,
    source: ConfigSource,
}

impl ConfigManager {
    /// 使用内置默认配置
    pub fn with_defaults() -> Self {
        Self {
            config: EngineConfig::default(),
            source: ConfigSource::BuiltIn,
        }
    }

    /// 使用调用方构造好的配置（会做校验）
    pub fn from_config(config: EngineConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source: ConfigSource::BuiltIn,
        })
    }

    /// 按查找顺序加载配置
    ///
    /// # 参数
    /// - explicit: 显式指定的配置文件路径（不存在时报错）
    ///
    /// # 返回
    /// - Ok(ConfigManager): 加载并校验通过
    /// - Err(ConfigError): 文件不存在 / 解析失败 / 值无效
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let env_value = std::env::var(CONFIG_PATH_ENV).ok();
        Self::load_from(explicit, env_value.as_deref(), default_config_path())
    }

    /// 加载逻辑本体（环境变量与默认路径由调用方传入）
    pub(crate) fn load_from(
        explicit: Option<&Path>,
        env_value: Option<&str>,
        user_default: Option<PathBuf>,
    ) -> ConfigResult<Self> {
        let source = resolve_source(explicit, env_value, user_default);

        let config = match &source {
            ConfigSource::Explicit(path) | ConfigSource::Environment(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path.display().to_string()));
                }
                read_config_file(path)?
            }
            ConfigSource::UserDir(path) => read_config_file(path)?,
            ConfigSource::BuiltIn => EngineConfig::default(),
        };

        config.validate()?;

        info!(source = ?source, "引擎配置加载完成");
        Ok(Self { config, source })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// 获取当前配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 与评估结果一起记录,便于事后复核所用参数
    pub fn config_snapshot(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(&self.config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}

/// 用户配置目录下的默认配置文件路径
///
/// 例如 Linux 下为 `~/.config/tail-swap-optimizer/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn resolve_source(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    user_default: Option<PathBuf>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(value) = env_value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return ConfigSource::Environment(PathBuf::from(trimmed));
        }
    }

    // 用户目录下没有配置文件不算错误,回落为内置默认
    match user_default {
        Some(path) if path.exists() => ConfigSource::UserDir(path),
        Some(path) => {
            debug!(path = %path.display(), "用户配置文件不存在,使用内置默认配置");
            ConfigSource::BuiltIn
        }
        None => ConfigSource::BuiltIn,
    }
}

fn read_config_file(path: &Path) -> ConfigResult<EngineConfig> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseError {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_when_nothing_configured() {
        let manager = ConfigManager::load_from(None, None, None).unwrap();
        assert_eq!(manager.source(), &ConfigSource::BuiltIn);
        assert_eq!(manager.config(), &EngineConfig::default());
    }

    #[test]
    fn test_missing_user_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.json");

        let manager = ConfigManager::load_from(None, None, Some(missing)).unwrap();
        assert_eq!(manager.source(), &ConfigSource::BuiltIn);
    }

    #[test]
    fn test_explicit_path_wins_over_env() {
        let explicit = write_temp_config(r#"{"rotation": {"min_connection_minutes": 40}}"#);
        let env = write_temp_config(r#"{"rotation": {"min_connection_minutes": 60}}"#);
        let env_path = env.path().display().to_string();

        let manager =
            ConfigManager::load_from(Some(explicit.path()), Some(env_path.as_str()), None).unwrap();
        assert_eq!(manager.config().rotation.min_connection_minutes, 40);
        assert!(matches!(manager.source(), ConfigSource::Explicit(_)));
    }

    #[test]
    fn test_env_path_used_when_no_explicit() {
        let env = write_temp_config(r#"{"swap": {"strong_threshold": 8.0}}"#);
        let env_path = env.path().display().to_string();

        let manager = ConfigManager::load_from(None, Some(env_path.as_str()), None).unwrap();
        assert_eq!(manager.config().swap.strong_threshold, 8.0);
        assert!(matches!(manager.source(), ConfigSource::Environment(_)));
    }

    #[test]
    fn test_blank_env_value_ignored() {
        let manager = ConfigManager::load_from(None, Some("   "), None).unwrap();
        assert_eq!(manager.source(), &ConfigSource::BuiltIn);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let missing = Path::new("/nonexistent/tail.json");
        let result = ConfigManager::load_from(Some(missing), None, None);
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_temp_config("{ not json");
        let result = ConfigManager::load_from(Some(file.path()), None, None);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_invalid_value_rejected_on_load() {
        let file = write_temp_config(r#"{"swap": {"burden_factor": 0.5}}"#);
        let result = ConfigManager::load_from(Some(file.path()), None, None);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_config_snapshot_round_trips() {
        let manager = ConfigManager::with_defaults();
        let snapshot = manager.config_snapshot().unwrap();
        let parsed: EngineConfig = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(&parsed, manager.config());
    }
}

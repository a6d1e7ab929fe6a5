// ==========================================
// 机尾调换优化系统 - API层错误类型
// ==========================================
// 职责: 汇总配置/导入边界的错误
// 说明: 引擎计算本身不失败,不可行调机是正常结果而不是错误
// ==========================================

use crate::config::error::ConfigError;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("数据导入失败: {0}")]
    Import(#[from] ImportError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

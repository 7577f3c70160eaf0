//! 领域层统一错误定义
//!
//! 聚焦解析、仓储与状态校验等基础设施/执行类故障的最小必要集合。
//! 与 [`error_or`](crate::error_or) 中的结果通道不同：此处的错误是
//! 致命故障，沿外层 `Result` 向宿主传播，不进入 `ErrorOr` 通道。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 序列化/解析 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("parse error: {reason}")]
    Parse { reason: String },

    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("database error: {reason}")]
    Database { reason: String },

    // --- 领域规则/状态 ---
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

// ---- Cross-crate conversions for infrastructure convenience ----
// 允许在基础设施层直接使用 `?` 将 uuid 等解析错误转换为 DomainError

impl From<uuid::Error> for DomainError {
    fn from(err: uuid::Error) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<std::num::ParseIntError> for DomainError {
    fn from(err: std::num::ParseIntError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}

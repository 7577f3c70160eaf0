use mediate_domain::error::DomainError;

/// 应用层致命故障
///
/// 与请求自身声明的 `ErrorOr` 响应不同：此处的错误表示管线执行失败
/// （路由缺失、校验器崩溃、持久化故障等），由宿主负责映射为传输层失败响应。
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("validator failed: request={request}, reason={reason}")]
    Validator {
        request: &'static str,
        reason: String,
    },

    #[error("infra: {0}")]
    Infra(String),

    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("handler already registered: request={request}")]
    AlreadyRegistered { request: &'static str },

    #[error("dispatch cancelled: request={request}")]
    Cancelled { request: &'static str },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

use crate::{context::AppContext, error::AppError, request::Request};
use async_trait::async_trait;

/// 调度器（Mediator）
///
/// - 负责根据请求的具体类型路由到已注册的管线与终端处理器；
/// - 框架可提供不同实现（如进程内、消息队列等）；
/// - 该 trait 带有泛型方法，通常以具体实现类型注入使用。
#[async_trait]
pub trait Mediator: Send + Sync {
    /// 分发请求，依注册顺序穿过管线阶段后抵达处理器
    ///
    /// - `ctx`：应用上下文（链路追踪、取消信号等）
    /// - `request`：具体请求实例
    async fn dispatch<R>(&self, ctx: &AppContext, request: R) -> Result<R::Response, AppError>
    where
        R: Request;
}

use bon::Builder;
use tokio_util::sync::CancellationToken;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息：
/// - 关联追踪 `correlation_id` 与执行者 `actor_id`；
/// - 取消信号（`CancellationToken`）：由调度方传入，经各管线阶段
///   原样转发至校验器、处理器与持久化提交，阶段自身不得吞掉取消。
///
/// 典型用法：
/// ```rust
/// use mediate_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .maybe_correlation_id(Some("cor-123".into()))
///     .maybe_actor_id(Some("u-1".into()))
///     .build();
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// ```
#[derive(Builder, Default, Debug, Clone)]
pub struct AppContext {
    /// 关联ID（链路追踪）
    correlation_id: Option<String>,
    /// 触发请求的主体ID
    actor_id: Option<String>,
    /// 取消信号（为空则使用永不取消的默认令牌）
    #[builder(default)]
    cancellation: CancellationToken,
}

impl AppContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }
}

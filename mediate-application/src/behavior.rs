//! 泛型管线阶段（Pipeline Behavior）
//!
//! 每个请求在抵达终端处理器前，依注册顺序穿过零个或多个阶段；
//! 阶段可以转发（调用 `next`）或短路（不调用 `next` 直接返回响应）。
//! 阶段实例只持有不可变配置，可在并发调度间安全共享。
//!
use crate::{
    context::AppContext, error::AppError, request::Request, request_handler::RequestHandler,
};
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type BehaviorFuture<Resp> = Pin<Box<dyn Future<Output = Result<Resp, AppError>> + Send>>;

type NextFn<R> = Box<
    dyn FnOnce(AppContext, R) -> BehaviorFuture<<R as Request>::Response> + Send,
>;

/// 管线中"剩余链路"的一次性延续
///
/// 消费式调用：每次调度构建一条新链，`invoke` 之后即失效，
/// 因而一个阶段最多只能转发一次。
pub struct Next<R: Request> {
    run: NextFn<R>,
}

impl<R: Request> Next<R> {
    /// 终端延续：直接调用注册的处理器
    pub fn terminal<H>(handler: Arc<H>) -> Self
    where
        H: RequestHandler<R> + ?Sized + 'static,
    {
        Self {
            run: Box::new(move |ctx, request| {
                Box::pin(async move { handler.handle(&ctx, request).await })
            }),
        }
    }

    /// 在既有链路前插入一个阶段
    pub fn wrap<B>(behavior: Arc<B>, next: Next<R>) -> Self
    where
        B: PipelineBehavior<R> + ?Sized + 'static,
    {
        Self {
            run: Box::new(move |ctx, request| {
                Box::pin(async move { behavior.handle(&ctx, request, next).await })
            }),
        }
    }

    /// 执行剩余链路
    pub async fn invoke(self, ctx: &AppContext, request: R) -> Result<R::Response, AppError> {
        (self.run)(ctx.clone(), request).await
    }
}

/// 管线阶段（拦截器）
///
/// - 转发：`next.invoke(ctx, request).await`，结果原样返回；
/// - 短路：不调用 `next`，自行构造响应返回；
/// - `ctx`（含取消信号）必须原样传给下游，阶段不得吞掉取消；
/// - 执行故障以 `Err(AppError)` 向宿主传播，与业务失败的响应值区分。
#[async_trait]
pub trait PipelineBehavior<R>: Send + Sync
where
    R: Request,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        request: R,
        next: Next<R>,
    ) -> Result<R::Response, AppError>;
}

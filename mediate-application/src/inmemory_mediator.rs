use crate::{
    behavior::{Next, PipelineBehavior},
    context::AppContext,
    error::AppError,
    mediator::Mediator,
    request::Request,
    request_handler::RequestHandler,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::any::{Any, TypeId, type_name, type_name_of_val};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type BoxAnySend = Box<dyn Any + Send>;

type DispatchFuture<'a> = Pin<Box<dyn Future<Output = Result<BoxAnySend, AppError>> + Send + 'a>>;

type DispatchFn =
    Arc<dyn for<'a> Fn(BoxAnySend, &'a AppContext) -> DispatchFuture<'a> + Send + Sync>;

/// 基于内存的 Mediator 实现
/// - 通过 TypeId 注册不同 Request 对应的处理器与管线阶段
/// - 运行时以类型擦除（Any）方式进行调度，并在调用端还原响应
/// - 每次调度按注册顺序重建一条延续链，阶段实例共享、链一次性使用
pub struct InMemoryMediator {
    handlers: DashMap<TypeId, (&'static str, DispatchFn)>,
}

impl Default for InMemoryMediator {
    fn default() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }
}

impl InMemoryMediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册无管线阶段的处理器
    pub fn register<R, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        self.register_with_behaviors::<R, H>(handler, Vec::new())
    }

    /// 注册处理器及其管线阶段
    ///
    /// `behaviors` 按给定顺序在处理器之前执行；
    /// 同一请求类型重复注册返回 `AlreadyRegistered`。
    pub fn register_with_behaviors<R, H>(
        &self,
        handler: Arc<H>,
        behaviors: Vec<Arc<dyn PipelineBehavior<R>>>,
    ) -> Result<(), AppError>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let key = TypeId::of::<R>();

        if self.handlers.contains_key(&key) {
            return Err(AppError::AlreadyRegistered { request: R::NAME });
        }

        let f: DispatchFn = {
            let handler = handler.clone();

            Arc::new(move |boxed_request, ctx| {
                let handler = handler.clone();
                let behaviors = behaviors.clone();

                Box::pin(async move {
                    // 正常情况下这里的 downcast 永远不会失败（键与闭包同一泛型 R）
                    match boxed_request.downcast::<R>() {
                        Ok(request) => {
                            let mut next = Next::terminal(handler);
                            for behavior in behaviors.iter().rev() {
                                next = Next::wrap(behavior.clone(), next);
                            }
                            let response = next.invoke(ctx, *request).await?;
                            Ok(Box::new(response) as BoxAnySend)
                        }
                        Err(found) => Err(AppError::TypeMismatch {
                            expected: type_name::<R>(),
                            found: type_name_of_val(&found),
                        }),
                    }
                })
            })
        };

        self.handlers.insert(key, (R::NAME, f));

        Ok(())
    }

    /// 获取已注册的请求名称列表（只读视图）
    pub fn registered_requests(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| e.value().0).collect()
    }

    async fn dispatch_impl<R>(
        &self,
        ctx: &AppContext,
        request: R,
    ) -> Result<R::Response, AppError>
    where
        R: Request,
    {
        // 取消/超时策略属于调度方：已取消的上下文不再进入链路
        if ctx.cancellation().is_cancelled() {
            return Err(AppError::Cancelled { request: R::NAME });
        }

        let Some(f) = self.handlers.get(&TypeId::of::<R>()).map(|e| e.value().1.clone()) else {
            log::warn!("no handler registered for request {}", R::NAME);
            return Err(AppError::HandlerNotFound(R::NAME));
        };

        log::debug!("dispatching request {}", R::NAME);
        let out = (f)(Box::new(request), ctx).await?;

        match out.downcast::<R::Response>() {
            Ok(response) => Ok(*response),
            Err(found) => Err(AppError::TypeMismatch {
                expected: type_name::<R::Response>(),
                found: type_name_of_val(&found),
            }),
        }
    }
}

#[async_trait]
impl Mediator for InMemoryMediator {
    async fn dispatch<R>(&self, ctx: &AppContext, request: R) -> Result<R::Response, AppError>
    where
        R: Request,
    {
        self.dispatch_impl::<R>(ctx, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediate_domain::error_or::{ErrorOr, FromErrors};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::task::JoinSet;
    use tokio_util::sync::CancellationToken;

    #[derive(Debug)]
    struct Get;

    impl Request for Get {
        const NAME: &'static str = "test.get";
        type Response = ErrorOr<usize>;
    }

    struct GetHandler {
        counter: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RequestHandler<Get> for GetHandler {
        async fn handle(&self, _ctx: &AppContext, _request: Get) -> Result<ErrorOr<usize>, AppError> {
            let v = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(ErrorOr::success(v))
        }
    }

    // 将执行痕迹写入共享日志的阶段，用于断言执行顺序
    struct Recording {
        label: &'static str,
        trace: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl PipelineBehavior<Get> for Recording {
        async fn handle(
            &self,
            ctx: &AppContext,
            request: Get,
            next: Next<Get>,
        ) -> Result<ErrorOr<usize>, AppError> {
            self.trace.lock().unwrap().push(self.label);
            next.invoke(ctx, request).await
        }
    }

    // 不调用 next 的短路阶段
    struct ShortCircuit;

    #[async_trait]
    impl PipelineBehavior<Get> for ShortCircuit {
        async fn handle(
            &self,
            _ctx: &AppContext,
            _request: Get,
            _next: Next<Get>,
        ) -> Result<ErrorOr<usize>, AppError> {
            Ok(ErrorOr::from_errors(vec![
                mediate_domain::error_or::Error::unexpected("Test.Stop", "short-circuited"),
            ]))
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn register_and_dispatch_works() {
        let mediator = InMemoryMediator::new();
        let counter = Arc::new(AtomicUsize::new(0));
        mediator
            .register::<Get, _>(Arc::new(GetHandler {
                counter: counter.clone(),
            }))
            .unwrap();

        let ctx = AppContext::default();
        let response = mediator.dispatch(&ctx, Get).await.unwrap();
        assert_eq!(response, ErrorOr::success(1));
        assert_eq!(mediator.registered_requests(), vec![Get::NAME]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn not_found_error_when_unregistered() {
        let mediator = InMemoryMediator::new();
        let ctx = AppContext::default();
        let err = mediator.dispatch(&ctx, Get).await.unwrap_err();
        match err {
            AppError::HandlerNotFound(name) => assert_eq!(name, Get::NAME),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn type_mismatch_error_when_response_downcast_fails() {
        let mediator = InMemoryMediator::new();
        // 手动插入一个错误的条目：键是 Get，但闭包返回 String 而非 ErrorOr<usize>
        let f: DispatchFn = Arc::new(|_boxed_request, _ctx| {
            Box::pin(async move { Ok(Box::new("wrong".to_string()) as BoxAnySend) })
        });
        mediator.handlers.insert(TypeId::of::<Get>(), (Get::NAME, f));

        let ctx = AppContext::default();
        let err = mediator.dispatch(&ctx, Get).await.unwrap_err();
        match err {
            AppError::TypeMismatch { expected, .. } => assert!(expected.contains("ErrorOr")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn duplicate_registration_is_rejected() {
        let mediator = InMemoryMediator::new();
        let counter = Arc::new(AtomicUsize::new(0));
        mediator
            .register::<Get, _>(Arc::new(GetHandler {
                counter: counter.clone(),
            }))
            .unwrap();

        let err = mediator
            .register::<Get, _>(Arc::new(GetHandler { counter }))
            .unwrap_err();
        match err {
            AppError::AlreadyRegistered { request } => assert_eq!(request, Get::NAME),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // 阶段按注册顺序执行，处理器最后执行
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn behaviors_run_in_registration_order() {
        let mediator = InMemoryMediator::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let trace = Arc::new(Mutex::new(Vec::new()));

        let behaviors: Vec<Arc<dyn PipelineBehavior<Get>>> = vec![
            Arc::new(Recording {
                label: "first",
                trace: trace.clone(),
            }),
            Arc::new(Recording {
                label: "second",
                trace: trace.clone(),
            }),
        ];
        mediator
            .register_with_behaviors::<Get, _>(
                Arc::new(GetHandler {
                    counter: counter.clone(),
                }),
                behaviors,
            )
            .unwrap();

        let ctx = AppContext::default();
        let response = mediator.dispatch(&ctx, Get).await.unwrap();

        assert_eq!(response, ErrorOr::success(1));
        assert_eq!(*trace.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn short_circuit_skips_handler() {
        let mediator = InMemoryMediator::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let behaviors: Vec<Arc<dyn PipelineBehavior<Get>>> = vec![Arc::new(ShortCircuit)];
        mediator
            .register_with_behaviors::<Get, _>(
                Arc::new(GetHandler {
                    counter: counter.clone(),
                }),
                behaviors,
            )
            .unwrap();

        let ctx = AppContext::default();
        let response = mediator.dispatch(&ctx, Get).await.unwrap();

        assert!(response.is_failure());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn cancelled_context_short_circuits_dispatch() {
        let mediator = InMemoryMediator::new();
        let counter = Arc::new(AtomicUsize::new(0));
        mediator
            .register::<Get, _>(Arc::new(GetHandler {
                counter: counter.clone(),
            }))
            .unwrap();

        let token = CancellationToken::new();
        token.cancel();
        let ctx = AppContext::builder().cancellation(token).build();

        let err = mediator.dispatch(&ctx, Get).await.unwrap_err();
        match err {
            AppError::Cancelled { request } => assert_eq!(request, Get::NAME),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_dispatch_is_safe() {
        let mediator = Arc::new(InMemoryMediator::new());
        let counter = Arc::new(AtomicUsize::new(0));
        mediator
            .register::<Get, _>(Arc::new(GetHandler {
                counter: counter.clone(),
            }))
            .unwrap();

        let mut set = JoinSet::new();
        let ctx = AppContext::default();
        for _ in 0..100 {
            let mediator = mediator.clone();
            let ctx = ctx.clone();
            set.spawn(async move { mediator.dispatch(&ctx, Get).await.unwrap() });
        }
        let mut results = Vec::new();
        while let Some(res) = set.join_next().await {
            results.push(res.unwrap().into_value().unwrap());
        }
        results.sort_unstable();
        assert_eq!(results.len(), 100);
        assert_eq!(results[0], 1);
        assert_eq!(results[99], 100);
    }
}

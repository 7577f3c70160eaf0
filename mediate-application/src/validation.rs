//! 校验阶段（Validation Behavior）
//!
//! 在请求抵达终端处理器前运行可选的结构校验：
//! - 未绑定校验器：直接转发（常见情形，只付出一次判空）；
//! - 校验通过：直接转发，绝不静默短路；
//! - 校验失败：不再调用下游，把全部失败按产生顺序映射为
//!   `Validation` 错误并打包为请求声明的响应类型返回。
//!
//! 响应类型必须具备 [`FromErrors`] 能力；不满足的注册组合在编译期即被拒绝。
//!
use crate::{
    behavior::{Next, PipelineBehavior},
    context::AppContext,
    error::AppError,
    request::Request,
};
use async_trait::async_trait;
use mediate_domain::error_or::{Error, FromErrors};
use std::sync::Arc;

/// 单个字段级校验失败：`(字段名, 失败消息)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field: String,
    pub message: String,
}

impl FieldFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 请求校验器
///
/// 对 `R` 做结构校验，按发现顺序返回全部字段级失败（可能为空）。
/// 返回 `Err` 表示校验器自身执行故障（非校验失败），
/// 由管线原样向宿主传播，绝不重试。
#[async_trait]
pub trait Validator<R>: Send + Sync
where
    R: Request,
{
    async fn validate(
        &self,
        ctx: &AppContext,
        request: &R,
    ) -> Result<Vec<FieldFailure>, AppError>;
}

/// 校验管线阶段
///
/// 每个请求类型至多绑定一个校验器，在构造时显式注入；
/// 未绑定属于合法状态（跳过校验而非失败）。
/// 实例仅持有该不可变引用，无每请求状态。
pub struct ValidationBehavior<R: Request> {
    validator: Option<Arc<dyn Validator<R>>>,
}

impl<R: Request> ValidationBehavior<R> {
    pub fn new(validator: Option<Arc<dyn Validator<R>>>) -> Self {
        Self { validator }
    }

    pub fn with_validator(validator: Arc<dyn Validator<R>>) -> Self {
        Self::new(Some(validator))
    }

    /// 未绑定校验器的透传阶段
    pub fn passthrough() -> Self {
        Self::new(None)
    }
}

impl<R: Request> Default for ValidationBehavior<R> {
    fn default() -> Self {
        Self::passthrough()
    }
}

#[async_trait]
impl<R> PipelineBehavior<R> for ValidationBehavior<R>
where
    R: Request,
    R::Response: FromErrors,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        request: R,
        next: Next<R>,
    ) -> Result<R::Response, AppError> {
        let Some(validator) = self.validator.as_ref() else {
            return next.invoke(ctx, request).await;
        };

        // 校验器故障（Err）原样上抛，区别于校验失败（非空失败列表）
        let failures = validator.validate(ctx, &request).await?;

        if failures.is_empty() {
            return next.invoke(ctx, request).await;
        }

        let errors: Vec<Error> = failures
            .into_iter()
            .map(|failure| Error::validation(failure.field, failure.message))
            .collect();

        log::debug!(
            "request {} rejected with {} validation error(s)",
            R::NAME,
            errors.len()
        );

        Ok(R::Response::from_errors(errors))
    }
}

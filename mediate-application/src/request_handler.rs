use crate::{context::AppContext, error::AppError, request::Request};
use async_trait::async_trait;

#[async_trait]
pub trait RequestHandler<R>: Send + Sync
where
    R: Request,
{
    async fn handle(&self, ctx: &AppContext, request: R) -> Result<R::Response, AppError>;
}

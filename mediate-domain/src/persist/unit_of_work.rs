use crate::error::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// 工作单元（Unit of Work）
///
/// 将此前通过仓储登记的全部变更作为一个整体提交；
/// 不支持部分提交。提交失败属于基础设施故障，
/// 以 `DomainError` 沿外层 `Result` 传播，不进入结果通道。
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// 提交当前登记的全部变更
    ///
    /// - `cancellation`：取消信号，由调用链原样传入，实现可自行观察
    async fn commit(&self, cancellation: &CancellationToken) -> DomainResult<()>;
}

#[async_trait]
impl<T> UnitOfWork for Arc<T>
where
    T: UnitOfWork + ?Sized,
{
    async fn commit(&self, cancellation: &CancellationToken) -> DomainResult<()> {
        (**self).commit(cancellation).await
    }
}

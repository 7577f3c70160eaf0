use std::sync::Arc;

/// 仓储（最小接口）
///
/// `add` 仅登记实体（fire-and-forget），实际写入发生在下一次
/// [`UnitOfWork::commit`](crate::persist::UnitOfWork::commit)。
/// 查询类方法由具体领域的仓储 trait 扩展定义。
pub trait Repository<E>: Send + Sync {
    /// 登记一个待持久化的实体
    fn add(&self, entity: E);
}

impl<E, T> Repository<E> for Arc<T>
where
    T: Repository<E> + ?Sized,
{
    fn add(&self, entity: E) {
        (**self).add(entity)
    }
}

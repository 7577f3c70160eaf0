//! 持久化边界
//!
//! 领域层只依赖两个最小接口：仓储的注册（`Repository`）与
//! 工作单元的提交（`UnitOfWork`）。具体事务/存储机制由基础设施实现。
//!
mod repository;
mod unit_of_work;

pub use repository::Repository;
pub use unit_of_work::UnitOfWork;

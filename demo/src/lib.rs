//! 示例应用：客户管理（demo）
//!
//! 演示一条完整的请求处理链：
//! - `domain`：客户聚合、值对象（电话、地址）与领域错误；
//! - `application`：创建客户命令与查询、校验器、处理器与响应 DTO；
//! - `infrastructure`：内存仓储与工作单元实现。
//!
pub mod application;
pub mod domain;
pub mod infrastructure;

//! 应用层请求管线（mediate-application）
//!
//! 以"请求 → 有序管线阶段 → 终端处理器"的方式处理每一个命令/查询：
//! - `request` / `request_handler`：请求与终端处理器抽象；
//! - `behavior`：泛型管线阶段（拦截器）与一次性延续 `Next`；
//! - `validation`：校验阶段，在请求抵达处理器前做结构校验并按需短路；
//! - `mediator` / `inmemory_mediator`：按请求具体类型路由到注册的管线与处理器。
//!
//! 失败分两条通道：业务失败（校验、领域规则）进入请求声明的
//! `ErrorOr` 响应；执行故障（校验器崩溃、持久化失败、路由缺失）
//! 以 [`AppError`](error::AppError) 沿外层 `Result` 传播给宿主。
//!
pub mod behavior;
pub mod context;
pub mod dto;
pub mod error;
pub mod inmemory_mediator;
pub mod mediator;
pub mod request;
pub mod request_handler;
pub mod validation;

pub use inmemory_mediator::InMemoryMediator;
pub use validation::ValidationBehavior;

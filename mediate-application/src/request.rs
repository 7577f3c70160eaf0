/// 应用层请求（Request）
///
/// 表达一次完整意图的命令或查询，构造后不可变。
/// - 请求类型与响应类型在类型层面一一绑定：同一请求类型总是产出同一响应类型；
/// - 建议保持语义化的"动宾结构"命名，如 `CreateCustomer`、`GetCustomer`。
///
/// 关联常量：
/// - `NAME`：请求的稳定名称，用于日志与错误报告。避免依赖 `type_name::<T>()`。
pub trait Request: Send + Sync + 'static {
    /// 请求的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 成功时由处理器产出的响应类型
    type Response: Send + 'static;
}

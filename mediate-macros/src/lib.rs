//! 过程宏（mediate-macros）
//!
//! 为领域建模提供两个属性宏：
//! - `#[value_object]`：为值对象合并基础派生；
//! - `#[entity_id]`：为单字段 tuple struct 生成标识包装类型的常用实现。
//!
use proc_macro::TokenStream;

mod entity_id;
mod utils;
mod value_object;

/// 值对象宏
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Debug, Clone, Serialize, Deserialize, PartialEq, Eq
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}

/// 实体标识宏
/// - 仅支持单字段 tuple struct
/// - 合并/追加派生：Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash
/// - 提供 new(value)、Display、FromStr、AsRef、From 等便捷实现
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

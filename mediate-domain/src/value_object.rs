//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//! 约定以"智能构造器"（如 `create(raw) -> Option<Self>`）构造：
//! 输入不合法时返回 `None`，绝不产出部分合法的实例。
//!

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

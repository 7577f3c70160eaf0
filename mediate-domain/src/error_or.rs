//! 统一结果通道（ErrorOr）
//!
//! 以单一类型承载"成功值 或 一组结构化错误"，供校验器、管线阶段与
//! 处理器统一返回失败，调用方无需关心失败产生于哪一环节。
//!
//! 约束：
//! - 成功与失败互斥，构造后不可变；
//! - 失败分支的错误序列非空且保持产生顺序；
//! - `From<Error>` / `From<Vec<Error>>` 允许将错误直接转换为任意
//!   `ErrorOr<T>`，无需构造 `T`。
//!
use serde::{Deserialize, Serialize};
use std::fmt;

/// 错误分类
///
/// - `Validation`：字段级校验失败，用户可修正，一次请求可携带多条；
/// - `NotFound` / `Conflict`：领域层面的查找失败与状态冲突；
/// - `Unexpected`：未归类的执行异常。
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Unexpected,
}

/// 结构化错误记录
///
/// 以 `code` + `message` 为结构化标识（相等性按值比较，而非引用）。
/// `code` 建议使用稳定字符串（字段名或 `Domain.Reason` 形式），
/// 便于接口层映射与断言。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    kind: ErrorKind,
    code: String,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// 字段级校验错误（`code` 通常为字段名）
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, code, message)
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, code, message)
    }

    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, code, message)
    }

    pub fn unexpected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, code, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// 由错误序列直接构造自身的能力
///
/// 管线阶段借助该能力把校验失败直接打包为请求声明的响应类型，
/// 不做任何运行时类型转换；响应类型不满足该约束的配置在编译期即被拒绝。
pub trait FromErrors: Sized {
    /// 由一组错误构造失败值（调用方保证序列非空）
    fn from_errors(errors: Vec<Error>) -> Self;
}

/// 成功值或一组错误
///
/// 失败分支的错误序列非空；[`ErrorOr::failure`] 对空序列断言失败，
/// 与 `Result::unwrap` 一样属于调用方编程错误。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorOr<T> {
    Success(T),
    Failure(Vec<Error>),
}

impl<T> ErrorOr<T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// 由非空错误序列构造失败值
    ///
    /// # Panics
    ///
    /// 错误序列为空时 panic。
    pub fn failure<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: Vec<Error> = errors.into_iter().collect();
        assert!(
            !errors.is_empty(),
            "ErrorOr::failure requires at least one error"
        );
        Self::Failure(errors)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// 失败时的错误序列（保持产生顺序）
    ///
    /// # Panics
    ///
    /// 对成功值调用时 panic；不确定分支时使用 [`ErrorOr::as_errors`]。
    pub fn errors(&self) -> &[Error] {
        match self {
            Self::Failure(errors) => errors,
            Self::Success(_) => panic!("called `ErrorOr::errors()` on a success value"),
        }
    }

    pub fn as_errors(&self) -> Option<&[Error]> {
        match self {
            Self::Failure(errors) => Some(errors),
            Self::Success(_) => None,
        }
    }

    pub fn first_error(&self) -> Option<&Error> {
        self.as_errors().and_then(|errors| errors.first())
    }

    /// 变换成功值，失败分支原样保留
    pub fn map<U, F>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ErrorOr::Success(f(value)),
            Self::Failure(errors) => ErrorOr::Failure(errors),
        }
    }

    pub fn into_result(self) -> Result<T, Vec<Error>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }
}

impl<T> From<Error> for ErrorOr<T> {
    fn from(error: Error) -> Self {
        Self::Failure(vec![error])
    }
}

impl<T> From<Vec<Error>> for ErrorOr<T> {
    fn from(errors: Vec<Error>) -> Self {
        Self::failure(errors)
    }
}

impl<T> FromErrors for ErrorOr<T> {
    fn from_errors(errors: Vec<Error>) -> Self {
        Self::failure(errors)
    }
}

//! 客户领域错误
//!
//! 统一结果通道中的领域级错误，`code` 使用稳定的 `Customer.*` 形式。
//!
use crate::domain::CustomerId;
use mediate_domain::error_or::Error;

pub fn phone_number_bad_format() -> Error {
    Error::validation("Customer.PhoneNumber", "phone number has not valid format")
}

pub fn address_bad_format() -> Error {
    Error::validation("Customer.Address", "address has not valid format")
}

pub fn email_already_registered(email: &str) -> Error {
    Error::conflict(
        "Customer.Email",
        format!("email {email} is already registered"),
    )
}

pub fn not_found(id: &CustomerId) -> Error {
    Error::not_found("Customer.NotFound", format!("customer {id} does not exist"))
}

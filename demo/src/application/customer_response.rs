use crate::domain::Customer;
use mediate_application::dto::Dto;
use serde::Serialize;
use uuid::Uuid;

/// 客户响应 DTO（面向接口层，序列化友好）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: AddressResponse,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressResponse {
    pub country: String,
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Dto for CustomerResponse {}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        use mediate_domain::entity::Entity;

        let address = customer.address();
        Self {
            id: customer.id().clone().into(),
            full_name: customer.full_name(),
            email: customer.email().to_string(),
            phone_number: customer.phone_number().as_str().to_string(),
            address: AddressResponse {
                country: address.country().to_string(),
                line1: address.line1().to_string(),
                line2: address.line2().to_string(),
                city: address.city().to_string(),
                state: address.state().to_string(),
                zip_code: address.zip_code().to_string(),
            },
            active: customer.is_active(),
        }
    }
}

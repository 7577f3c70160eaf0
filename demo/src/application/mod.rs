mod create_customer;
mod customer_response;
mod get_customer;

pub use create_customer::{CreateCustomer, CreateCustomerHandler, CreateCustomerValidator};
pub use customer_response::{AddressResponse, CustomerResponse};
pub use get_customer::{GetCustomer, GetCustomerHandler};

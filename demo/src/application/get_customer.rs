use crate::application::CustomerResponse;
use crate::domain::{CustomerId, CustomerRepository, errors};
use async_trait::async_trait;
use mediate_application::context::AppContext;
use mediate_application::error::AppError;
use mediate_application::request::Request;
use mediate_application::request_handler::RequestHandler;
use mediate_domain::error_or::ErrorOr;
use std::sync::Arc;

/// 按标识查询客户
#[derive(Debug, Clone)]
pub struct GetCustomer {
    pub id: CustomerId,
}

impl Request for GetCustomer {
    const NAME: &'static str = "customer.get";
    type Response = ErrorOr<CustomerResponse>;
}

pub struct GetCustomerHandler<R> {
    repository: Arc<R>,
}

impl<R> GetCustomerHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RequestHandler<GetCustomer> for GetCustomerHandler<R>
where
    R: CustomerRepository + 'static,
{
    async fn handle(
        &self,
        _ctx: &AppContext,
        query: GetCustomer,
    ) -> Result<ErrorOr<CustomerResponse>, AppError> {
        let customer = self.repository.find_by_id(&query.id).await?;

        Ok(match customer {
            Some(customer) => ErrorOr::success(CustomerResponse::from(&customer)),
            None => errors::not_found(&query.id).into(),
        })
    }
}

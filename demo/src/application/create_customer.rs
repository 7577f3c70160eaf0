use crate::domain::{Address, Customer, CustomerId, CustomerRepository, PhoneNumber, errors};
use async_trait::async_trait;
use mediate_application::context::AppContext;
use mediate_application::error::AppError;
use mediate_application::request::Request;
use mediate_application::request_handler::RequestHandler;
use mediate_application::validation::{FieldFailure, Validator};
use mediate_domain::entity::Entity;
use mediate_domain::error_or::ErrorOr;
use mediate_domain::persist::{Repository, UnitOfWork};
use std::sync::Arc;

/// 创建客户命令
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Request for CreateCustomer {
    const NAME: &'static str = "customer.create";
    type Response = ErrorOr<CustomerId>;
}

/// 创建客户的结构校验器
///
/// 只做字段级结构检查，按字段声明顺序上报全部失败；
/// 领域格式的最终裁决仍在处理器的值对象构造中完成。
pub struct CreateCustomerValidator;

#[async_trait]
impl Validator<CreateCustomer> for CreateCustomerValidator {
    async fn validate(
        &self,
        _ctx: &AppContext,
        request: &CreateCustomer,
    ) -> Result<Vec<FieldFailure>, AppError> {
        let mut failures = Vec::new();

        if request.name.trim().is_empty() {
            failures.push(FieldFailure::new("Name", "name is required"));
        }
        if request.last_name.trim().is_empty() {
            failures.push(FieldFailure::new("LastName", "last name is required"));
        }
        if request.email.trim().is_empty() {
            failures.push(FieldFailure::new("Email", "email is required"));
        } else if !request.email.contains('@') {
            failures.push(FieldFailure::new("Email", "email has not valid format"));
        }
        if request.phone_number.trim().is_empty() {
            failures.push(FieldFailure::new("PhoneNumber", "phone number is required"));
        } else if PhoneNumber::create(&request.phone_number).is_none() {
            failures.push(FieldFailure::new(
                "PhoneNumber",
                "phone number has not valid format",
            ));
        }

        Ok(failures)
    }
}

/// 创建客户命令处理器
///
/// 先逐一检查值对象构造结果，任一失败立即以对应领域错误返回，
/// 绝不组装部分合法的聚合；成功路径登记聚合并在最后提交一次。
pub struct CreateCustomerHandler<R, U> {
    repository: Arc<R>,
    unit_of_work: Arc<U>,
}

impl<R, U> CreateCustomerHandler<R, U> {
    pub fn new(repository: Arc<R>, unit_of_work: Arc<U>) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }
}

#[async_trait]
impl<R, U> RequestHandler<CreateCustomer> for CreateCustomerHandler<R, U>
where
    R: CustomerRepository + 'static,
    U: UnitOfWork + 'static,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        command: CreateCustomer,
    ) -> Result<ErrorOr<CustomerId>, AppError> {
        let Some(phone_number) = PhoneNumber::create(&command.phone_number) else {
            return Ok(errors::phone_number_bad_format().into());
        };

        let Some(address) = Address::create(
            &command.country,
            &command.line1,
            &command.line2,
            &command.city,
            &command.state,
            &command.zip_code,
        ) else {
            return Ok(errors::address_bad_format().into());
        };

        if self.repository.exists_by_email(&command.email).await? {
            return Ok(errors::email_already_registered(&command.email).into());
        }

        let customer = Customer::new(
            CustomerId::generate(),
            command.name,
            command.last_name,
            command.email,
            phone_number,
            address,
            true,
        );
        let id = customer.id().clone();

        self.repository.add(customer);
        self.unit_of_work.commit(ctx.cancellation()).await?;

        log::debug!("customer {id} created");

        Ok(ErrorOr::success(id))
    }
}

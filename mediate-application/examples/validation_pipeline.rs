use async_trait::async_trait;
use mediate_application::InMemoryMediator;
use mediate_application::ValidationBehavior;
use mediate_application::behavior::PipelineBehavior;
use mediate_application::context::AppContext;
use mediate_application::error::AppError;
use mediate_application::mediator::Mediator;
use mediate_application::request::Request;
use mediate_application::request_handler::RequestHandler;
use mediate_application::validation::{FieldFailure, Validator};
use mediate_domain::error_or::ErrorOr;
use std::sync::Arc;

#[derive(Debug)]
struct RegisterUser {
    name: String,
    email: String,
}

impl Request for RegisterUser {
    const NAME: &'static str = "user.register";
    type Response = ErrorOr<u64>;
}

struct RegisterUserValidator;

#[async_trait]
impl Validator<RegisterUser> for RegisterUserValidator {
    async fn validate(
        &self,
        _ctx: &AppContext,
        request: &RegisterUser,
    ) -> Result<Vec<FieldFailure>, AppError> {
        let mut failures = Vec::new();
        if request.name.trim().is_empty() {
            failures.push(FieldFailure::new("Name", "name is required"));
        }
        if !request.email.contains('@') {
            failures.push(FieldFailure::new("Email", "email has not valid format"));
        }
        Ok(failures)
    }
}

struct RegisterUserHandler;

#[async_trait]
impl RequestHandler<RegisterUser> for RegisterUserHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        request: RegisterUser,
    ) -> Result<ErrorOr<u64>, AppError> {
        println!("RegisterUser: name={} email={}", request.name, request.email);
        Ok(ErrorOr::success(42))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mediator = InMemoryMediator::new();

    let behaviors: Vec<Arc<dyn PipelineBehavior<RegisterUser>>> = vec![Arc::new(
        ValidationBehavior::with_validator(Arc::new(RegisterUserValidator)),
    )];
    mediator.register_with_behaviors::<RegisterUser, _>(Arc::new(RegisterUserHandler), behaviors)?;

    let ctx = AppContext::builder()
        .maybe_correlation_id(Some("cor-1".into()))
        .build();

    // 合法请求 -> 穿过校验阶段抵达处理器
    let ok = mediator
        .dispatch(
            &ctx,
            RegisterUser {
                name: "Alice".into(),
                email: "alice@example.com".into(),
            },
        )
        .await?;
    println!("accepted: id={:?}", ok.into_value());

    // 非法请求 -> 校验阶段短路，处理器不会执行
    let rejected = mediator
        .dispatch(
            &ctx,
            RegisterUser {
                name: "".into(),
                email: "not-an-email".into(),
            },
        )
        .await?;
    for error in rejected.errors() {
        eprintln!("rejected: {error}");
    }

    Ok(())
}

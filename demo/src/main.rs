use demo::application::{
    CreateCustomer, CreateCustomerHandler, CreateCustomerValidator, GetCustomer,
    GetCustomerHandler,
};
use demo::infrastructure::{InMemoryCustomerRepository, InMemoryStore, InMemoryUnitOfWork};
use mediate_application::behavior::PipelineBehavior;
use mediate_application::context::AppContext;
use mediate_application::mediator::Mediator;
use mediate_application::{InMemoryMediator, ValidationBehavior};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryStore::new();
    let repository = Arc::new(InMemoryCustomerRepository::new(store.clone()));
    let unit_of_work = Arc::new(InMemoryUnitOfWork::new(store.clone()));

    let mediator = InMemoryMediator::new();

    let create_behaviors: Vec<Arc<dyn PipelineBehavior<CreateCustomer>>> = vec![Arc::new(
        ValidationBehavior::with_validator(Arc::new(CreateCustomerValidator)),
    )];
    mediator.register_with_behaviors::<CreateCustomer, _>(
        Arc::new(CreateCustomerHandler::new(
            repository.clone(),
            unit_of_work.clone(),
        )),
        create_behaviors,
    )?;
    mediator.register::<GetCustomer, _>(Arc::new(GetCustomerHandler::new(repository.clone())))?;

    let ctx = AppContext::builder()
        .maybe_correlation_id(Some("cor-1".into()))
        .maybe_actor_id(Some("u-1".into()))
        .build();

    // 合法请求 -> 创建成功
    let created = mediator
        .dispatch(
            &ctx,
            CreateCustomer {
                name: "Alice".into(),
                last_name: "Smith".into(),
                email: "alice@example.com".into(),
                phone_number: "+34612345678".into(),
                country: "Spain".into(),
                line1: "Calle Mayor 1".into(),
                line2: "".into(),
                city: "Madrid".into(),
                state: "Madrid".into(),
                zip_code: "28001".into(),
            },
        )
        .await?;
    let id = created.into_value().expect("customer should be created");
    println!("created customer: {id}");

    // 查询刚创建的客户
    let fetched = mediator.dispatch(&ctx, GetCustomer { id }).await?;
    println!(
        "fetched customer: {}",
        serde_json::to_string_pretty(fetched.value().expect("customer should exist"))?
    );

    // 非法请求 -> 校验阶段短路，处理器不会执行
    let rejected = mediator
        .dispatch(
            &ctx,
            CreateCustomer {
                name: "".into(),
                last_name: "Smith".into(),
                email: "not-an-email".into(),
                phone_number: "12ab".into(),
                country: "Spain".into(),
                line1: "Calle Mayor 1".into(),
                line2: "".into(),
                city: "Madrid".into(),
                state: "Madrid".into(),
                zip_code: "28001".into(),
            },
        )
        .await?;
    for error in rejected.errors() {
        eprintln!("rejected: {error}");
    }

    Ok(())
}

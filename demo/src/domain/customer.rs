use crate::domain::{Address, PhoneNumber};
use chrono::{DateTime, Utc};
use mediate_domain::entity::Entity;
use mediate_domain::error::DomainResult;
use mediate_domain::persist::Repository;
use mediate_macros::entity_id;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 客户标识
#[entity_id]
pub struct CustomerId(Uuid);

impl CustomerId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// 客户聚合
///
/// 只能由已经通过智能构造器校验的值对象组装而成，
/// 因此不存在"部分合法"的客户实例。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    last_name: String,
    email: String,
    phone_number: PhoneNumber,
    address: Address,
    active: bool,
    created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: PhoneNumber,
        address: Address,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number,
            address,
            active,
            created_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &CustomerId {
        &self.id
    }
}

/// 客户仓储
///
/// 在最小仓储接口（登记）之上扩展本领域需要的查询；
/// 查询只命中已提交的数据，登记中的实体在下一次提交前不可见。
#[async_trait::async_trait]
pub trait CustomerRepository: Repository<Customer> {
    async fn find_by_id(&self, id: &CustomerId) -> DomainResult<Option<Customer>>;

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool>;
}

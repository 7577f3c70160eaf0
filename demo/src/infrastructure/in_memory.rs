//! 内存持久化实现
//!
//! 仓储登记的实体先进入暂存区，直到工作单元提交时一次性落库；
//! 查询只命中已提交数据。用于示例与测试。
//!
use crate::domain::{Customer, CustomerId, CustomerRepository};
use async_trait::async_trait;
use dashmap::DashMap;
use mediate_domain::entity::Entity;
use mediate_domain::error::{DomainError, DomainResult};
use mediate_domain::persist::{Repository, UnitOfWork};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// 仓储与工作单元共享的存储
#[derive(Default)]
pub struct InMemoryStore {
    committed: DashMap<CustomerId, Customer>,
    staged: Mutex<Vec<Customer>>,
    commits: AtomicUsize,
    fail_next_commit: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 已提交的客户数量
    pub fn committed_count(&self) -> usize {
        self.committed.len()
    }

    /// 成功提交的次数
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    /// 暂存区是否为空
    pub fn staged_is_empty(&self) -> bool {
        self.staged.lock().unwrap().is_empty()
    }

    /// 让下一次提交失败（模拟基础设施故障）
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }
}

pub struct InMemoryCustomerRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCustomerRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

impl Repository<Customer> for InMemoryCustomerRepository {
    fn add(&self, customer: Customer) {
        self.store.staged.lock().unwrap().push(customer);
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: &CustomerId) -> DomainResult<Option<Customer>> {
        Ok(self.store.committed.get(id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        Ok(self
            .store
            .committed
            .iter()
            .any(|entry| entry.value().email() == email))
    }
}

pub struct InMemoryUnitOfWork {
    store: Arc<InMemoryStore>,
}

impl InMemoryUnitOfWork {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(&self, _cancellation: &CancellationToken) -> DomainResult<()> {
        if self.store.fail_next_commit.swap(false, Ordering::SeqCst) {
            return Err(DomainError::Database {
                reason: "simulated commit failure".to_string(),
            });
        }

        let staged = std::mem::take(&mut *self.store.staged.lock().unwrap());
        for customer in staged {
            self.store.committed.insert(customer.id().clone(), customer);
        }
        self.store.commits.fetch_add(1, Ordering::SeqCst);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, PhoneNumber};

    fn customer() -> Customer {
        Customer::new(
            CustomerId::generate(),
            "Alice",
            "Smith",
            "alice@example.com",
            PhoneNumber::create("+34612345678").unwrap(),
            Address::create("Spain", "Calle Mayor 1", "", "Madrid", "Madrid", "28001").unwrap(),
            true,
        )
    }

    // 登记的实体在提交前不可见
    #[tokio::test]
    async fn staged_entities_are_invisible_until_commit() {
        let store = InMemoryStore::new();
        let repo = InMemoryCustomerRepository::new(store.clone());
        let uow = InMemoryUnitOfWork::new(store.clone());

        let entity = customer();
        let id = entity.id().clone();
        repo.add(entity);

        assert!(repo.find_by_id(&id).await.unwrap().is_none());

        uow.commit(&CancellationToken::new()).await.unwrap();

        assert!(repo.find_by_id(&id).await.unwrap().is_some());
        assert_eq!(store.commit_count(), 1);
        assert!(store.staged_is_empty());
    }

    #[tokio::test]
    async fn failed_commit_keeps_staged_entities() {
        let store = InMemoryStore::new();
        let repo = InMemoryCustomerRepository::new(store.clone());
        let uow = InMemoryUnitOfWork::new(store.clone());

        repo.add(customer());
        store.fail_next_commit();

        let err = uow.commit(&CancellationToken::new()).await.unwrap_err();
        match err {
            DomainError::Database { .. } => {}
            other => panic!("unexpected {other:?}"),
        }
        assert!(!store.staged_is_empty());
        assert_eq!(store.commit_count(), 0);
        assert_eq!(store.committed_count(), 0);
    }
}

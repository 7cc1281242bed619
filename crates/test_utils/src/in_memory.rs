//! In-Memory Port Adapters
//!
//! Hash-map implementations of the domain ports. They honor the same
//! contracts as the PostgreSQL adapters: name ordering for funds, email
//! ordering and uniqueness for users, `NotFound` on missing ids.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{DomainPort, FundId, HealthCheckResult, HealthCheckable, PageRequest, PortError, UserId};
use domain_auth::{User, UserPort};
use domain_fund::{Fund, FundPort, FundQuery};

/// In-memory [`UserPort`]
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with users
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id, u)).collect()),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl DomainPort for InMemoryUserStore {}

#[async_trait]
impl UserPort for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PortError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn get(&self, id: UserId) -> Result<User, PortError> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("User", id))
    }

    async fn insert(&self, user: &User) -> Result<(), PortError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(PortError::conflict(format!("email '{}' already registered", user.email)));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, PortError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(page.slice(&users).to_vec())
    }
}

/// In-memory [`FundPort`]
#[derive(Debug, Default)]
pub struct InMemoryFundStore {
    funds: RwLock<HashMap<FundId, Fund>>,
}

impl InMemoryFundStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with funds
    pub fn with_funds(funds: impl IntoIterator<Item = Fund>) -> Self {
        Self {
            funds: RwLock::new(funds.into_iter().map(|f| (f.id, f)).collect()),
        }
    }

    /// Number of stored funds
    pub async fn len(&self) -> usize {
        self.funds.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl DomainPort for InMemoryFundStore {}

#[async_trait]
impl FundPort for InMemoryFundStore {
    async fn list(&self, query: &FundQuery) -> Result<Vec<Fund>, PortError> {
        let mut funds: Vec<Fund> = self
            .funds
            .read()
            .await
            .values()
            .filter(|f| query.matches(f))
            .cloned()
            .collect();
        funds.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(query.page.slice(&funds).to_vec())
    }

    async fn get(&self, id: FundId) -> Result<Fund, PortError> {
        self.funds
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Fund", id))
    }

    async fn insert(&self, fund: &Fund) -> Result<(), PortError> {
        let mut funds = self.funds.write().await;
        if funds.contains_key(&fund.id) {
            return Err(PortError::conflict(format!("fund {} already exists", fund.id)));
        }
        funds.insert(fund.id, fund.clone());
        Ok(())
    }

    async fn update(&self, fund: &Fund) -> Result<(), PortError> {
        let mut funds = self.funds.write().await;
        match funds.get_mut(&fund.id) {
            Some(existing) => {
                *existing = fund.clone();
                Ok(())
            }
            None => Err(PortError::not_found("Fund", fund.id)),
        }
    }

    async fn delete(&self, id: FundId) -> Result<(), PortError> {
        self.funds
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Fund", id))
    }
}

/// Health probe whose outcome tests can flip
#[derive(Debug)]
pub struct SwitchableHealth {
    healthy: AtomicBool,
}

impl SwitchableHealth {
    pub fn healthy() -> Self {
        Self {
            healthy: AtomicBool::new(true),
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            healthy: AtomicBool::new(false),
        }
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }
}

#[async_trait]
impl HealthCheckable for SwitchableHealth {
    async fn health_check(&self) -> HealthCheckResult {
        if self.healthy.load(Ordering::SeqCst) {
            HealthCheckResult::healthy("in-memory", 0)
        } else {
            HealthCheckResult::unhealthy("in-memory", 0, "switched off")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_auth::Role;
    use domain_fund::{FundDraft, RiskLevel};
    use rust_decimal_macros::dec;

    fn fund(name: &str, risk: RiskLevel) -> Fund {
        Fund::create(FundDraft::new(name, dec!(100), dec!(1), risk)).unwrap()
    }

    #[tokio::test]
    async fn test_fund_store_orders_and_filters() {
        let store = InMemoryFundStore::with_funds([
            fund("Charlie", RiskLevel::High),
            fund("Alpha", RiskLevel::Low),
            fund("Bravo", RiskLevel::High),
        ]);

        let all = store.list(&FundQuery::all()).await.unwrap();
        let names: Vec<_> = all.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Bravo", "Charlie"]);

        let high = store
            .list(&FundQuery::all().with_risk_level(RiskLevel::High))
            .await
            .unwrap();
        assert_eq!(high.len(), 2);
    }

    #[tokio::test]
    async fn test_fund_store_missing_ids() {
        let store = InMemoryFundStore::new();
        let ghost = fund("Ghost", RiskLevel::Low);

        assert!(store.get(ghost.id).await.unwrap_err().is_not_found());
        assert!(store.update(&ghost).await.unwrap_err().is_not_found());
        assert!(store.delete(ghost.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_user_store_rejects_duplicate_email() {
        let store = InMemoryUserStore::new();
        let first = User::new("dup@sofi.test", "hash", Role::Viewer).unwrap();
        let second = User::new("dup@sofi.test", "hash", Role::Admin).unwrap();

        store.insert(&first).await.unwrap();
        assert!(store.insert(&second).await.unwrap_err().is_conflict());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_switchable_health() {
        let health = SwitchableHealth::healthy();
        assert!(health.health_check().await.is_healthy());
        health.set_healthy(false);
        assert!(!health.health_check().await.is_healthy());
    }
}

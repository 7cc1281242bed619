//! Authentication Domain Ports
//!
//! `UserPort` is the persistence seam for user accounts. The PostgreSQL
//! adapter lives in `infra_db`; an in-memory adapter lives in `test_utils`.

use async_trait::async_trait;

use core_kernel::{DomainPort, PageRequest, PortError, UserId};

use crate::user::User;

/// Persistence operations for user accounts
#[async_trait]
pub trait UserPort: DomainPort {
    /// Finds a user by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PortError>;

    /// Gets a user by id
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when no such user exists
    async fn get(&self, id: UserId) -> Result<User, PortError>;

    /// Stores a new user
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` when the email is already taken
    async fn insert(&self, user: &User) -> Result<(), PortError>;

    /// Lists users ordered by email
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, PortError>;
}

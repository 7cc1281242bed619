//! User repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{DomainPort, PageRequest, PortError, UserId};
use domain_auth::{Role, User, UserPort};

use super::port_error;
use crate::error::DatabaseError;

/// PostgreSQL implementation of [`UserPort`]
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Creates a new PgUserRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgUserRepository {}

#[async_trait]
impl UserPort for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PortError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, email, password_hash, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(port_error)?;

        row.map(|r| User::try_from(r).map_err(PortError::from)).transpose()
    }

    async fn get(&self, id: UserId) -> Result<User, PortError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, email, password_hash, role, created_at FROM users WHERE user_id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(port_error)?
        .ok_or_else(|| PortError::not_found("User", id))?;

        Ok(User::try_from(row)?)
    }

    async fn insert(&self, user: &User) -> Result<(), PortError> {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::from(user.id))
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, PortError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, email, password_hash, role, created_at
            FROM users
            ORDER BY email
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(page.limit()))
        .bind(i64::from(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(port_error)?;

        rows.into_iter()
            .map(|row| User::try_from(row).map_err(PortError::from))
            .collect()
    }
}

/// Database row for a user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub user_id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DatabaseError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .map_err(|_| DatabaseError::CorruptRow(format!("user role '{}'", row.role)))?;

        Ok(User {
            id: UserId::from(row.user_id),
            email: row.email,
            password_hash: row.password_hash,
            role,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_maps_to_user() {
        let row = UserRow {
            user_id: Uuid::now_v7(),
            email: "manager@sofi.io".to_string(),
            password_hash: "$argon2id$v=19$stub".to_string(),
            role: "Manager".to_string(),
            created_at: Utc::now(),
        };

        let user = User::try_from(row).unwrap();
        assert_eq!(user.role, Role::Manager);
        assert_eq!(user.email, "manager@sofi.io");
    }

    #[test]
    fn test_unknown_role_is_corrupt() {
        let row = UserRow {
            user_id: Uuid::now_v7(),
            email: "x@sofi.io".to_string(),
            password_hash: String::new(),
            role: "Owner".to_string(),
            created_at: Utc::now(),
        };

        assert!(matches!(User::try_from(row), Err(DatabaseError::CorruptRow(_))));
    }
}

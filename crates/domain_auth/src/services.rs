//! Authentication application service

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};
use zeroize::Zeroizing;

use core_kernel::{PageRequest, UserId};

use crate::credentials::LoginCredentials;
use crate::error::AuthError;
use crate::password::PasswordHasher;
use crate::ports::UserPort;
use crate::role::Role;
use crate::user::{normalize_email, User};
use crate::MIN_PASSWORD_LENGTH;

/// Verified against on unknown emails so both login failures cost one Argon2 pass
const DUMMY_PASSWORD: &str = "sofi-unknown-account";

/// Credential checks and account management on top of a [`UserPort`]
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserPort>,
    hasher: PasswordHasher,
    dummy_hash: Arc<OnceCell<String>>,
}

impl AuthService {
    /// Creates a new service
    ///
    /// # Arguments
    ///
    /// * `users` - User persistence adapter
    /// * `hasher` - Password hasher used for new accounts
    pub fn new(users: Arc<dyn UserPort>, hasher: PasswordHasher) -> Self {
        Self {
            users,
            hasher,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Verifies credentials and returns the matching user
    ///
    /// Unknown emails and wrong passwords both yield
    /// [`AuthError::InvalidCredentials`], after the same amount of hashing.
    pub async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, AuthError> {
        let password = Zeroizing::new(credentials.password().to_owned());

        let Some(user) = self.users.find_by_email(credentials.email()).await? else {
            let dummy = self
                .dummy_hash
                .get_or_try_init(|| self.hash_blocking(Zeroizing::new(DUMMY_PASSWORD.to_owned())))
                .await?;
            self.verify_blocking(password, dummy.clone()).await?;
            warn!(email = %credentials.email(), "Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.verify_blocking(password, user.password_hash.clone()).await? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = %user.id, role = %user.role, "User authenticated");
        Ok(user)
    }

    /// Creates a new account
    ///
    /// # Errors
    ///
    /// * `InvalidEmail` - malformed address
    /// * `WeakPassword` - shorter than [`MIN_PASSWORD_LENGTH`] or blank
    /// * `DuplicateEmail` - address already registered
    pub async fn register(&self, email: &str, password: &str, role: Role) -> Result<User, AuthError> {
        let email = normalize_email(email)?;
        validate_password(password)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail(email));
        }

        let hash = self.hash_blocking(Zeroizing::new(password.to_owned())).await?;
        let user = User::new(&email, hash, role)?;

        self.users.insert(&user).await.map_err(|e| {
            if e.is_conflict() {
                AuthError::DuplicateEmail(email.clone())
            } else {
                AuthError::Port(e)
            }
        })?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Creates the initial admin account if it does not exist yet
    ///
    /// Returns `true` when a new account was created.
    pub async fn ensure_bootstrap_admin(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        let normalized = normalize_email(email)?;
        if self.users.find_by_email(&normalized).await?.is_some() {
            return Ok(false);
        }

        match self.register(&normalized, password, Role::Admin).await {
            Ok(_) => Ok(true),
            // Another instance created it between the lookup and the insert
            Err(AuthError::DuplicateEmail(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Gets a user by id
    pub async fn get_user(&self, id: UserId) -> Result<User, AuthError> {
        self.users.get(id).await.map_err(|e| {
            if e.is_not_found() {
                AuthError::UserNotFound(id.to_string())
            } else {
                AuthError::Port(e)
            }
        })
    }

    /// Lists users ordered by email
    pub async fn list_users(&self, page: PageRequest) -> Result<Vec<User>, AuthError> {
        Ok(self.users.list(page).await?)
    }

    async fn hash_blocking(&self, password: Zeroizing<String>) -> Result<String, AuthError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
    }

    async fn verify_blocking(&self, password: Zeroizing<String>, hash: String) -> Result<bool, AuthError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
    }
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.trim().is_empty() {
        return Err(AuthError::WeakPassword("password must not be blank".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use core_kernel::{DomainPort, PortError};

    struct NoUsers;

    impl DomainPort for NoUsers {}

    #[async_trait]
    impl UserPort for NoUsers {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, PortError> {
            Ok(None)
        }

        async fn get(&self, id: UserId) -> Result<User, PortError> {
            Err(PortError::not_found("User", id))
        }

        async fn insert(&self, _user: &User) -> Result<(), PortError> {
            Ok(())
        }

        async fn list(&self, _page: PageRequest) -> Result<Vec<User>, PortError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_unknown_email_still_verifies_a_hash() {
        let service = AuthService::new(Arc::new(NoUsers), PasswordHasher::new(64, 1).unwrap());
        let credentials = LoginCredentials::try_from_parts("ghost@sofi.test", "whatever-password").unwrap();

        assert!(service.dummy_hash.get().is_none());

        let first = service.authenticate(&credentials).await;
        let second = service.authenticate(&credentials).await;

        assert!(matches!(first, Err(AuthError::InvalidCredentials)));
        assert!(matches!(second, Err(AuthError::InvalidCredentials)));
        let dummy = service.dummy_hash.get().unwrap();
        assert!(dummy.starts_with("$argon2id$"));
        assert!(service.hasher.verify(DUMMY_PASSWORD, dummy).unwrap());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("longenough").is_ok());
        assert!(matches!(validate_password("short"), Err(AuthError::WeakPassword(_))));
        assert!(matches!(validate_password("          "), Err(AuthError::WeakPassword(_))));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(validate_password("ééééééé").is_err());
        assert!(validate_password("éééééééé").is_ok());
    }
}

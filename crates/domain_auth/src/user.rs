//! User accounts

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::ValidateEmail;

use core_kernel::UserId;

use crate::error::AuthError;
use crate::role::Role;

/// A user account able to sign in to the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Trimmed, lowercased email address
    pub email: String,
    /// Argon2id PHC string
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role used for authorization checks
    pub role: Role,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user from an already-hashed password
    ///
    /// # Arguments
    ///
    /// * `email` - Raw email address; normalized before storage
    /// * `password_hash` - PHC string produced by [`crate::PasswordHasher`]
    /// * `role` - Role granted to the account
    pub fn new(email: &str, password_hash: impl Into<String>, role: Role) -> Result<Self, AuthError> {
        Ok(Self {
            id: UserId::new(),
            email: normalize_email(email)?,
            password_hash: password_hash.into(),
            role,
            created_at: Utc::now(),
        })
    }
}

/// Trims and lowercases an email address, rejecting malformed input
pub fn normalize_email(email: &str) -> Result<String, AuthError> {
    let normalized = email.trim().to_lowercase();
    if !normalized.validate_email() {
        return Err(AuthError::InvalidEmail(email.trim().to_string()));
    }
    Ok(normalized)
}

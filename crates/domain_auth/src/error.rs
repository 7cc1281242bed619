//! Authentication domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the authentication domain
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password; the two are never distinguished
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("A user with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Password rejected: {0}")]
    WeakPassword(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Port(#[from] PortError),
}

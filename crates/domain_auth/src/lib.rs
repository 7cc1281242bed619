//! Authentication Domain
//!
//! Users, their roles, and the credential check that precedes token issuance.
//!
//! # Key Concepts
//!
//! - **User**: an account identified by a normalized email address
//! - **Role**: one of Admin, Manager, Analyst, Viewer
//! - **Permission**: a capability a role grants (fund writes, exports, ...)
//! - **Password hash**: an Argon2id PHC string; plaintext never leaves
//!   [`LoginCredentials`] or [`PasswordHasher`]
//!
//! Token signing is an interface concern and lives in `interface_api`.

pub mod role;
pub mod user;
pub mod credentials;
pub mod password;
pub mod ports;
pub mod services;
pub mod error;

pub use role::{Role, Permission};
pub use user::{User, normalize_email};
pub use credentials::LoginCredentials;
pub use password::PasswordHasher;
pub use ports::UserPort;
pub use services::AuthService;
pub use error::AuthError;

/// Minimum length accepted for a new password
pub const MIN_PASSWORD_LENGTH: usize = 8;

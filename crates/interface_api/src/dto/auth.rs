//! Auth DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::UserId;
use domain_auth::{AuthError, LoginCredentials, Role};

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = AuthError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    pub role: Role,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// The caller as described by their token
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

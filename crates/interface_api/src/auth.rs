//! Authentication and authorization
//!
//! Access tokens are HS256 JWTs carrying the user's id, email and role.
//! Authorization is a permission lookup on the role in the token.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::UserId;
use domain_auth::{Permission, Role, User};

use crate::error::ApiError;

/// JWT claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: UserId,
    pub email: String,
    pub role: Role,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Issuer
    pub iss: String,
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token could not be signed: {0}")]
    Encoding(String),
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
}

/// Creates a signed access token for a user
///
/// # Arguments
///
/// * `user` - Authenticated user
/// * `secret` - JWT secret key
/// * `issuer` - Value of the `iss` claim
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(user: &User, secret: &str, issuer: &str, expiration_secs: u64) -> Result<String, TokenError> {
    let now = Utc::now();
    let lifetime = i64::try_from(expiration_secs).map_err(|_| TokenError::Encoding("expiry out of range".into()))?;

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role,
        iat: now.timestamp(),
        exp: (now + Duration::seconds(lifetime)).timestamp(),
        iss: issuer.to_string(),
    };

    encode_claims(&claims, secret)
}

/// Signs arbitrary claims
pub fn encode_claims(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Encoding(e.to_string()))
}

/// Validates a token's signature, expiry and issuer
pub fn validate_token(token: &str, secret: &str, issuer: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[issuer]);

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::TokenExpired,
            _ => TokenError::InvalidToken,
        })?;

    Ok(token_data.claims)
}

/// Fails with `403 Forbidden` unless the token's role grants `permission`
pub fn require(claims: &Claims, permission: Permission) -> Result<(), ApiError> {
    if claims.role.can(permission) {
        Ok(())
    } else {
        Err(ApiError::Forbidden(format!(
            "Role {} lacks permission {}",
            claims.role, permission
        )))
    }
}

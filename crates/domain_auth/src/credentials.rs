//! Login credentials as submitted by a caller
//!
//! Parsing happens before any lookup so services only ever see trimmed,
//! lowercased emails and non-empty passwords.

use zeroize::Zeroizing;

use crate::error::AuthError;

/// Validated login credentials used by [`crate::AuthService::authenticate`].
///
/// ## Invariants
/// - `email` is trimmed, lowercased and non-empty.
/// - `password` is non-empty and kept verbatim, whitespace included.
///
/// Blank input is reported as [`AuthError::InvalidCredentials`] so the login
/// path has a single failure shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, AuthError> {
        let normalized = email.trim().to_lowercase();
        if normalized.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Self {
            email: normalized,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email suitable for user lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_parts_are_rejected() {
        for (email, password) in [("", "pw"), ("   ", "pw"), ("user@sofi.io", "")] {
            let err = LoginCredentials::try_from_parts(email, password).unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
        }
    }

    #[test]
    fn test_email_is_normalized_password_is_not() {
        let creds = LoginCredentials::try_from_parts("  Admin@SOFI.io ", " pass word ").unwrap();
        assert_eq!(creds.email(), "admin@sofi.io");
        assert_eq!(creds.password(), " pass word ");
    }
}

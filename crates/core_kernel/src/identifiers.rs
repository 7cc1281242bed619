//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around UUIDs keep a user id from being passed where a
//! fund id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new time-ordered identifier (v7)
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix used by `Display`
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Prefix is optional so bare UUIDs from URLs parse too
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(UserId, "USR");
define_id!(FundId, "FND");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_id_display() {
        let id = FundId::new();
        assert!(id.to_string().starts_with("FND-"));
    }

    #[test]
    fn test_id_parsing_with_and_without_prefix() {
        let original = UserId::new();
        let prefixed: UserId = original.to_string().parse().unwrap();
        let bare: UserId = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(original, prefixed);
        assert_eq!(original, bare);
    }

    #[test]
    fn test_wrong_prefix_is_rejected() {
        let user = UserId::new();
        let as_fund = format!("FND-{}", user.as_uuid());
        assert!(as_fund.parse::<UserId>().is_err());
    }

    #[test]
    fn test_ids_are_time_ordered() {
        let first = FundId::new();
        let second = FundId::new();
        assert!(first <= second);
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let id = FundId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
